use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Palette, UI-kit classes and the shared motion rules, mounted once at the root.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg: #f7f8fa;
                --surface: #ffffff;
                --text: #0f1b2d;
                --muted: #5b6b80;
                --border: #d9e0ea;
                --primary: #0a2540;
                --accent: #00b3a4;
                --accent-strong: #008f83;
                --warning: #f5a524;
                --success: #18a957;
                --error: #e5484d;
                --shadow: 0 8px 24px rgba(10, 37, 64, 0.08);
                --spring: cubic-bezier(0.34, 1.56, 0.64, 1);
            }
            html.dark {
                --bg: #0b1220;
                --surface: #121b2e;
                --text: #e8eef7;
                --muted: #9aa8bc;
                --border: #24324a;
                --primary: #e8eef7;
                --shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: var(--bg);
                color: var(--text);
                font-family: 'Inter', system-ui, -apple-system, sans-serif;
                transition: background-color 0.3s ease, color 0.3s ease;
            }

            .container { margin: 0 auto; width: 100%; box-sizing: border-box; }
            .w-sm { max-width: 640px; }
            .w-md { max-width: 768px; }
            .w-lg { max-width: 1024px; }
            .w-xl { max-width: 1280px; }
            .w-2xl { max-width: 1536px; }
            .w-hero { max-width: 1440px; }
            .w-full { max-width: none; }
            .px-0 { padding-left: 0; padding-right: 0; }
            .px-sm { padding-left: 1rem; padding-right: 1rem; }
            .px-md { padding-left: 1.5rem; padding-right: 1.5rem; }
            .px-lg { padding-left: 2rem; padding-right: 2rem; }
            .px-xl { padding-left: 3rem; padding-right: 3rem; }
            .py-0 { padding-top: 0; padding-bottom: 0; }
            .py-sm { padding-top: 2rem; padding-bottom: 2rem; }
            .py-md { padding-top: 4rem; padding-bottom: 4rem; }
            .py-lg { padding-top: 6rem; padding-bottom: 6rem; }
            .py-xl { padding-top: 8rem; padding-bottom: 8rem; }
            .py-hero { padding-top: 8rem; padding-bottom: 6rem; }

            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                border: 2px solid transparent;
                border-radius: 0.75rem;
                font-weight: 700;
                cursor: pointer;
                text-decoration: none;
                transition: transform 0.2s ease, background-color 0.2s ease, box-shadow 0.2s ease;
            }
            .btn:hover { transform: translateY(-1px); }
            .btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
            .btn--primary { background: var(--accent); color: #ffffff; }
            .btn--primary:hover { background: var(--accent-strong); box-shadow: var(--shadow); }
            .btn--secondary { background: transparent; color: var(--text); border-color: var(--border); }
            .btn--link { background: none; color: var(--accent); padding: 0; }
            .btn--sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
            .btn--md { padding: 0.75rem 1.5rem; font-size: 1rem; }
            .btn--lg { padding: 1rem 2rem; font-size: 1.125rem; }
            .btn--icon { width: 2.5rem; height: 2.5rem; padding: 0; }

            .card {
                background: var(--surface);
                border: 1px solid var(--border);
                color: var(--text);
            }
            .card--elevated { box-shadow: var(--shadow); border-color: transparent; }
            .pad-0 { padding: 0; }
            .pad-sm { padding: 1rem; }
            .pad-md { padding: 1.5rem; }
            .pad-lg { padding: 2rem; }
            .radius-sm { border-radius: 0.5rem; }
            .radius-md { border-radius: 1rem; }
            .radius-lg { border-radius: 1.5rem; }
            .card__title { margin: 0 0 0.5rem; font-size: 1.25rem; }
            .card__description { margin: 0; color: var(--muted); }
            .card__footer { margin-top: 1.25rem; display: flex; gap: 0.75rem; }

            .field { display: flex; flex-direction: column; gap: 0.375rem; }
            .field__label { font-weight: 600; font-size: 0.875rem; }
            .field__control {
                padding: 0.75rem 1rem;
                border: 2px solid var(--border);
                border-radius: 0.75rem;
                background: var(--surface);
                color: var(--text);
                font: inherit;
            }
            .field__control:focus { outline: none; border-color: var(--accent); }
            .field__control--error { border-color: var(--error); }
            .field__control--multiline { resize: vertical; min-height: 6rem; }
            .field__error { margin: 0; color: var(--error); font-size: 0.8125rem; }
            .field__helper { margin: 0; color: var(--muted); font-size: 0.8125rem; }

            .badge {
                display: inline-flex;
                align-items: center;
                gap: 0.375rem;
                border-radius: 9999px;
                font-weight: 600;
                border: 1px solid transparent;
            }
            .badge--sm { padding: 0.125rem 0.5rem; font-size: 0.75rem; }
            .badge--md { padding: 0.25rem 0.75rem; font-size: 0.8125rem; }
            .badge--lg { padding: 0.375rem 1rem; font-size: 0.9375rem; }
            .badge--default { background: var(--primary); color: var(--bg); }
            .badge--secondary { background: var(--border); color: var(--text); }
            .badge--outline { border-color: var(--border); color: var(--text); }
            .badge--accent { background: rgba(0, 179, 164, 0.12); color: var(--accent); }
            .badge--warning { background: rgba(245, 165, 36, 0.15); color: var(--warning); }
            .badge--success { background: rgba(24, 169, 87, 0.15); color: var(--success); }
            .badge--error { background: rgba(229, 72, 77, 0.15); color: var(--error); }
            .badge--interactive { cursor: pointer; }
            .badge-group { display: flex; flex-wrap: wrap; gap: 0.5rem; }

            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }
            .reveal.is-visible { opacity: 1; transform: none; }

            .disclosure__panel {
                display: grid;
                grid-template-rows: 0fr;
                transition: grid-template-rows 0.3s ease;
            }
            .disclosure__panel.is-open { grid-template-rows: 1fr; }
            .disclosure__panel > div { overflow: hidden; }

            .sticky-cta {
                position: fixed;
                left: 1rem;
                right: 1rem;
                bottom: 1rem;
                z-index: 40;
                transform: translateY(140%);
                opacity: 0;
                transition: transform 0.45s var(--spring), opacity 0.3s ease;
            }
            .sticky-cta.is-visible { transform: none; opacity: 1; }

            .alert { padding: 1rem; border-radius: 0.75rem; font-weight: 600; }
            .alert--success { background: rgba(24, 169, 87, 0.12); color: var(--success); }
            .alert--error { background: rgba(229, 72, 77, 0.12); color: var(--error); }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                .reveal, .sticky-cta, .disclosure__panel, .btn {
                    transition: none;
                }
            }
        "#)} />
    }
}
