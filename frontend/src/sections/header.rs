use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::{track, AnalyticsEvent};
use crate::components::button::{Button, ButtonSize};
use crate::config::{CONTACT_SECTION_ID, HEADER_SHADOW_THRESHOLD_PX};
use crate::interaction::media::use_viewport;
use crate::interaction::scroll::{scroll_to_section, use_scroll_threshold};
use crate::links::on_section_cta;
use crate::theme::use_theme;

/// (label, section id)
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Como Funciona", "como-funciona"),
    ("Casos", "casos"),
    ("Resultados", "resultados"),
    ("Recursos", "recursos"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_scroll_threshold(HEADER_SHADOW_THRESHOLD_PX);
    let menu_open = use_bool_toggle(false);
    let viewport = use_viewport();
    let theme = use_theme();

    // the menu only exists in the compact layout
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |compact| {
                if !*compact && *menu_open {
                    menu_open.toggle();
                }
                || ()
            },
            viewport.compact_nav,
        );
    }

    let nav_to = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if scroll_to_section(section) && *menu_open {
                    menu_open.toggle();
                }
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    let theme_toggle = theme.map(|ctx| {
        let dark = ctx.theme.is_dark();
        let onclick = {
            let toggle = ctx.toggle.clone();
            Callback::from(move |_: MouseEvent| {
                track(AnalyticsEvent::ButtonClick {
                    name: "theme_toggle".to_string(),
                });
                toggle.emit(());
            })
        };
        let label = if dark { "Ativar modo claro" } else { "Ativar modo escuro" };
        html! {
            <button class="header__theme" aria-label={label} title={label} {onclick}>
                { if dark { "☀" } else { "☾" } }
            </button>
        }
    });

    let links = NAV_ITEMS.iter().map(|(label, section)| {
        html! {
            <a href={format!("#{}", section)} class="header__link" onclick={nav_to(*section)}>
                {*label}
            </a>
        }
    });

    html! {
        <header class={classes!("header", scrolled.then_some("header--scrolled"))}>
            <div class="header__bar">
                <a href="#hero" class="header__logo" onclick={nav_to("hero")}>
                    <span class="header__mark" aria-hidden="true">{"◆"}</span>
                    <span>{"ProceX AI"}</span>
                </a>

                if viewport.compact_nav {
                    <button
                        class="header__burger"
                        aria-label="Abrir menu"
                        aria-expanded={if *menu_open { "true" } else { "false" }}
                        onclick={toggle_menu}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                } else {
                    <nav class="header__nav" aria-label="Principal">
                        { for links.clone() }
                    </nav>
                    <div class="header__actions">
                        { theme_toggle.clone().unwrap_or_default() }
                        <Button size={ButtonSize::Default} onclick={Some(on_section_cta(CONTACT_SECTION_ID, "header"))}>
                            {"DIAGNÓSTICO GRATUITO"}
                        </Button>
                    </div>
                }
            </div>

            if viewport.compact_nav && *menu_open {
                <nav class="header__menu" aria-label="Menu">
                    { for links }
                    <div class="header__menu-actions">
                        { theme_toggle.unwrap_or_default() }
                        <Button onclick={Some(on_section_cta(CONTACT_SECTION_ID, "header_mobile"))}>
                            {"DIAGNÓSTICO GRATUITO"}
                        </Button>
                    </div>
                </nav>
            }

            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: var(--bg);
                    transition: box-shadow 0.3s ease, background-color 0.3s ease;
                }
                .header--scrolled {
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(6px);
                }
                .header__bar {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .header__logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 800;
                    font-size: 1.25rem;
                    color: var(--text);
                    text-decoration: none;
                }
                .header__mark { color: var(--accent); }
                .header__nav { display: flex; gap: 2rem; }
                .header__link {
                    color: var(--text);
                    text-decoration: none;
                    font-weight: 600;
                }
                .header__link:hover { color: var(--accent); }
                .header__actions, .header__menu-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .header__theme, .header__burger {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 0.5rem;
                    color: var(--text);
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                    font-size: 1.1rem;
                }
                .header__menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem 1.5rem;
                    border-top: 1px solid var(--border);
                }
                "#}
            </style>
        </header>
    }
}
