use yew::prelude::*;

use crate::analytics::{track, AnalyticsEvent};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardPadding, CardVariant};
use crate::components::contact_form::ContactForm;
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::links::{on_whatsapp_click, whatsapp_link, DEFAULT_WHATSAPP_MESSAGE};

const BENEFITS: &[&str] = &[
    "Diagnóstico gratuito (30min)",
    "Proposta em 48h",
    "Implementação em 14d ou 1º mês grátis",
];

/// Closing call to action with the lead form.
#[function_component(CtaFinal)]
pub fn cta_final() -> Html {
    let form_ref = use_node_ref();

    let on_primary = {
        let form_ref = form_ref.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::cta("final_cta"));
            if let Some(form) = form_ref.cast::<web_sys::Element>() {
                form.scroll_into_view();
            }
        })
    };

    html! {
        <Container tag={ContainerTag::Section} id={CONTACT_SECTION_ID} vertical={ContainerVertical::Xl} class="cta-final">
            <div class="cta-final__layout">
                <Reveal track_as="cta_final" class="cta-final__pitch">
                    <h2 id="cta-final-heading">{"Pronto Para Multiplicar Sua Produtividade?"}</h2>
                    <p class="cta-final__lead">{"Diagnóstico gratuito de 30min. Sem compromisso."}</p>
                    <ul class="cta-final__benefits">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <li><span aria-hidden="true">{"✓ "}</span>{*benefit}</li>
                        }) }
                    </ul>
                    <div class="cta-final__actions">
                        <Button size={ButtonSize::Lg} onclick={Some(on_primary)}>
                            {"DIAGNÓSTICO GRATUITO"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Secondary}
                            size={ButtonSize::Lg}
                            href={whatsapp_link(Some(DEFAULT_WHATSAPP_MESSAGE))}
                            target="_blank"
                            onclick={Some(on_whatsapp_click("final_cta"))}
                        >
                            {"Falar WhatsApp"}
                        </Button>
                    </div>
                    <p class="cta-final__rating">{"★★★★★ 4.8/5 em 50+ projetos"}</p>
                    <p class="cta-final__reassurance">
                        {"Não cobramos o diagnóstico. Não pedimos cartão de crédito. Apenas 30 minutos para descobrir como IA pode transformar seu negócio."}
                    </p>
                </Reveal>
                <div ref={form_ref}>
                    <Card variant={CardVariant::Elevated} padding={CardPadding::Lg}>
                        <ContactForm />
                    </Card>
                </div>
            </div>
            <style>
                {r#"
                .cta-final__layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .cta-final h2 { font-size: clamp(2rem, 4.5vw, 3.25rem); margin: 0 0 1rem; }
                .cta-final__lead { font-size: 1.25rem; color: var(--muted); }
                .cta-final__benefits { list-style: none; padding: 0; line-height: 2; font-weight: 600; }
                .cta-final__benefits span { color: var(--success); }
                .cta-final__actions { display: flex; gap: 1rem; flex-wrap: wrap; margin: 1.5rem 0; }
                .cta-final__rating { font-weight: 700; }
                .cta-final__reassurance { color: var(--muted); font-size: 0.9rem; }
                .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                .contact-form__grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.25rem;
                }
                .contact-form__submit { width: 100%; }
                .contact-form__legal { font-size: 0.8rem; color: var(--muted); text-align: center; margin: 0; }
                .contact-form__legal a { color: var(--accent); }
                @media (max-width: 1023px) {
                    .cta-final__layout { grid-template-columns: 1fr; }
                }
                @media (max-width: 767px) {
                    .contact-form__grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </Container>
    }
}
