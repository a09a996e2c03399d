use yew::prelude::*;

use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::interaction::media::use_viewport;
use crate::links::on_section_cta;
use crate::widgets::disclosure::{Disclosure, DisclosureAction, OpenPolicy};

struct Step {
    number: u8,
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    duration: &'static str,
    highlight: Option<&'static str>,
    description: &'static str,
    deliverables: [&'static str; 3],
}

const STEPS: &[Step] = &[
    Step {
        number: 1,
        icon: "🔍",
        title: "DIAGNÓSTICO",
        subtitle: "Entendemos seu negócio",
        duration: "30 minutos",
        highlight: Some("GRÁTIS"),
        description: "Conversa estratégica para mapear processos, dores e oportunidades de IA no seu negócio.",
        deliverables: ["Mapeamento de processos", "Identificação de oportunidades", "Proposta inicial"],
    },
    Step {
        number: 2,
        icon: "🎨",
        title: "DESENHO DO AGENTE",
        subtitle: "Planejamos a solução",
        duration: "3-5 dias",
        highlight: None,
        description: "Desenhamos a arquitetura do agente com fluxos, integrações e personalidade da marca.",
        deliverables: ["Arquitetura detalhada", "Fluxos conversacionais", "Integrações planejadas"],
    },
    Step {
        number: 3,
        icon: "💻",
        title: "DESENVOLVIMENTO",
        subtitle: "Construímos com IA",
        duration: "5-7 dias",
        highlight: None,
        description: "Desenvolvimento do agente com treino em dados reais e configuração de integrações.",
        deliverables: ["Agente funcional", "Integrações ativas", "Treino customizado"],
    },
    Step {
        number: 4,
        icon: "✅",
        title: "TESTES E AJUSTES",
        subtitle: "Refinamos tudo",
        duration: "2-3 dias",
        highlight: None,
        description: "Testes em ambiente controlado, ajustes finos e validação com sua equipe.",
        deliverables: ["Testes funcionais", "Ajustes finos", "Validação completa"],
    },
    Step {
        number: 5,
        icon: "🚀",
        title: "GO LIVE",
        subtitle: "Lançamos e evoluímos",
        duration: "Contínuo",
        highlight: None,
        description: "Lançamento gradual com monitoramento ativo e evolução baseada em dados reais.",
        deliverables: ["Deploy gradual", "Monitoramento 24/7", "Otimização contínua"],
    },
];

fn step_details(step: &Step) -> Html {
    html! {
        <>
            <div class="step__duration">
                <span>{"⏱ "}{step.duration}</span>
                if let Some(highlight) = step.highlight {
                    <Badge variant={BadgeVariant::Success} size={BadgeSize::Sm}>{highlight}</Badge>
                }
            </div>
            <p class="step__description">{step.description}</p>
            <ul class="step__deliverables">
                { for step.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let viewport = use_viewport();
    let expanded = use_reducer(|| Disclosure::<u8>::new(OpenPolicy::Single));

    let steps = if viewport.mobile {
        html! {
            <div class="steps steps--accordion">
                { for STEPS.iter().map(|step| {
                    let open = expanded.is_open(&step.number);
                    let number = step.number;
                    let onclick = {
                        let expanded = expanded.clone();
                        Callback::from(move |_: MouseEvent| expanded.dispatch(DisclosureAction::Toggle(number)))
                    };
                    html! {
                        <div class={classes!("step", open.then_some("step--open"))}>
                            <button
                                class="step__header"
                                aria-expanded={if open { "true" } else { "false" }}
                                aria-controls={format!("step-content-{}", number)}
                                {onclick}
                            >
                                <span class="step__number">{number}</span>
                                <span class="step__titles">
                                    <strong>{step.title}</strong>
                                    <small>{step.subtitle}</small>
                                </span>
                                <span class="step__chevron" aria-hidden="true">{ if open { "−" } else { "+" } }</span>
                            </button>
                            <div
                                id={format!("step-content-{}", number)}
                                class={classes!("disclosure__panel", open.then_some("is-open"))}
                            >
                                <div>{ step_details(step) }</div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        }
    } else {
        html! {
            <ol class="steps steps--timeline">
                { for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li class="step">
                        <Reveal delay_ms={200 * i as u32}>
                            <div class="step__icon" aria-hidden="true">{step.icon}</div>
                            <span class="step__number">{step.number}</span>
                            <h3>{step.title}</h3>
                            <p class="step__subtitle">{step.subtitle}</p>
                            { step_details(step) }
                        </Reveal>
                    </li>
                }) }
            </ol>
        }
    };

    html! {
        <Container tag={ContainerTag::Section} id="como-funciona" vertical={ContainerVertical::Lg} class="how-it-works">
            <Reveal track_as="how_it_works" class="section-heading">
                <h2 id="howitworks-heading">{"5 Passos em 14 Dias"}</h2>
                <p>{"Processo transparente, rápido e sem fricção. Você acompanha cada etapa."}</p>
            </Reveal>
            { steps }
            <div class="how-it-works__cta">
                <Button size={ButtonSize::Lg} onclick={Some(on_section_cta(CONTACT_SECTION_ID, "how_it_works"))}>
                    {"COMEÇAR MEU DIAGNÓSTICO"}
                </Button>
                <p>{"🛡 Implementação em 14 dias ou 1º mês grátis"}</p>
            </div>
            <style>
                {r#"
                .steps { list-style: none; padding: 0; margin: 0; }
                .steps--timeline {
                    display: grid;
                    grid-template-columns: repeat(5, minmax(0, 1fr));
                    gap: 1.25rem;
                }
                .steps--accordion { display: flex; flex-direction: column; gap: 0.75rem; }
                .step__icon { font-size: 2rem; }
                .step__number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #ffffff;
                    font-weight: 800;
                }
                .step__subtitle, .step__description { color: var(--muted); }
                .step__duration { display: flex; gap: 0.5rem; align-items: center; font-weight: 600; }
                .step__deliverables { padding-left: 1.25rem; }
                .steps--accordion .step {
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    background: var(--surface);
                }
                .step__header {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    text-align: left;
                    cursor: pointer;
                }
                .step__titles { display: flex; flex-direction: column; flex: 1; }
                .steps--accordion .disclosure__panel > div { padding: 0 1rem; }
                .step--open .disclosure__panel > div { padding-bottom: 1rem; }
                .how-it-works__cta { text-align: center; margin-top: 3rem; }
                "#}
            </style>
        </Container>
    }
}
