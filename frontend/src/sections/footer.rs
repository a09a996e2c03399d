use chrono::{Datelike, Local};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{track, AnalyticsEvent};
use crate::components::button::{Button, ButtonSize};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::config::CONTACT_SECTION_ID;
use crate::form::newsletter::{pending_timer, NewsletterAction, NewsletterState, NewsletterStatus};
use crate::interaction::scroll::scroll_to_section;
use crate::links::{on_external_click, on_whatsapp_click, whatsapp_link, SOCIAL_LINKS};
use crate::Route;

const SECTION_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Soluções",
        &[("Casos de Uso", "casos"), ("Como Funciona", "como-funciona"), ("Integrações", "integracoes")],
    ),
    (
        "Recursos",
        &[("Resultados", "resultados"), ("Depoimentos", "depoimentos"), ("FAQ", "faq")],
    ),
    ("Empresa", &[("Contato", CONTACT_SECTION_ID), ("Diferenciais", "recursos")]),
];

const LEGAL_LINKS: &[(&str, Route)] = &[
    ("Privacidade", Route::Privacy),
    ("Termos", Route::Terms),
    ("LGPD", Route::Lgpd),
];

#[function_component(NewsletterForm)]
fn newsletter_form() -> Html {
    let state = use_reducer(NewsletterState::default);

    {
        let status = state.status;
        let state = state.clone();
        use_effect_with_deps(
            move |status| {
                let timer = pending_timer(*status).map(|(delay, action)| {
                    Timeout::new(delay, move || {
                        if matches!(action, NewsletterAction::Subscribed) {
                            track(AnalyticsEvent::NewsletterSignup);
                        }
                        state.dispatch(action);
                    })
                });
                move || drop(timer)
            },
            status,
        );
    }

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(NewsletterAction::Input(input.value()));
        })
    };
    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(NewsletterAction::Submit);
        })
    };
    let loading = state.status == NewsletterStatus::Loading;

    html! {
        <form class="newsletter" {onsubmit}>
            <div class="newsletter__row">
                <input
                    type="text"
                    inputmode="email"
                    class="field__control"
                    placeholder="seu@email.com"
                    aria-label="Digite seu email para newsletter"
                    value={state.email.clone()}
                    disabled={loading}
                    {oninput}
                />
                <Button button_type="submit" size={ButtonSize::Sm} disabled={loading}>
                    { if loading { "..." } else { "Inscrever" } }
                </Button>
            </div>
            if state.status == NewsletterStatus::Success {
                <p class="newsletter__message newsletter__message--success" role="status">
                    {"Obrigado! Você receberá novidades em breve."}
                </p>
            }
            if state.status == NewsletterStatus::Error {
                <p class="newsletter__message newsletter__message--error" role="alert">
                    {"Erro ao inscrever. Tente novamente."}
                </p>
            }
        </form>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let columns = SECTION_COLUMNS.iter().map(|(title, links)| {
        html! {
            <div class="footer__column">
                <h4>{*title}</h4>
                <ul>
                    { for links.iter().map(|(label, section)| {
                        let section: &'static str = section;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(section);
                        });
                        html! {
                            <li><a href={format!("#{}", section)} {onclick}>{*label}</a></li>
                        }
                    }) }
                </ul>
            </div>
        }
    });

    html! {
        <Container tag={ContainerTag::Footer} vertical={ContainerVertical::Default} class="footer">
            <div class="footer__top">
                <div class="footer__brand">
                    <strong class="footer__logo">{"◆ ProceX AI"}</strong>
                    <p>
                        {"Conectamos sua PME aos especialistas certos em IA. Agentes personalizados em 14 dias."}
                    </p>
                    <a
                        href={whatsapp_link(None)}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={on_whatsapp_click("footer")}
                    >
                        {"WhatsApp"}
                    </a>
                </div>
                { for columns }
                <div class="footer__column">
                    <h4>{"Newsletter"}</h4>
                    <p>{"Novidades sobre IA para PMEs, uma vez por mês."}</p>
                    <NewsletterForm />
                </div>
            </div>

            <div class="footer__bottom">
                <p>{format!("© {} ProceX AI. Todos os direitos reservados.", year)}</p>
                <nav class="footer__legal" aria-label="Links legais">
                    { for LEGAL_LINKS.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                    }) }
                </nav>
                <div class="footer__social">
                    { for SOCIAL_LINKS.iter().map(|(name, url)| html! {
                        <a
                            href={*url}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={*name}
                            onclick={on_external_click(url)}
                        >
                            {*name}
                        </a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .footer { border-top: 1px solid var(--border); padding-bottom: 6rem; }
                .footer__top {
                    display: grid;
                    grid-template-columns: 2fr repeat(3, 1fr) 2fr;
                    gap: 2rem;
                }
                .footer__logo { font-size: 1.25rem; }
                .footer__brand p, .footer__column p { color: var(--muted); }
                .footer a { color: var(--text); text-decoration: none; }
                .footer a:hover { color: var(--accent); }
                .footer__column h4 { margin: 0 0 1rem; }
                .footer__column ul { list-style: none; padding: 0; margin: 0; line-height: 2; }
                .newsletter__row { display: flex; gap: 0.5rem; }
                .newsletter__row input { flex: 1; min-width: 0; }
                .newsletter__message { font-size: 0.875rem; margin: 0.5rem 0 0; }
                .newsletter__message--success { color: var(--success); }
                .newsletter__message--error { color: var(--error); }
                .footer__bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .footer__legal, .footer__social { display: flex; gap: 1.25rem; }
                @media (max-width: 1023px) {
                    .footer__top { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                }
                @media (max-width: 767px) {
                    .footer__top { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </Container>
    }
}
