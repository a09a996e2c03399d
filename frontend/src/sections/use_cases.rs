use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent, CardFooter, CardPadding, CardTitle};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::interaction::media::use_viewport;
use crate::links::on_section_cta;
use crate::widgets::disclosure::{Disclosure, DisclosureAction, OpenPolicy};

struct UseCase {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    tasks: [&'static str; 3],
    metric: &'static str,
    outcome: &'static str,
}

const USE_CASES: &[UseCase] = &[
    UseCase {
        icon: "🤝",
        title: "COMERCIAL",
        subtitle: "Vendas Inteligentes",
        tasks: ["Qualificação de leads", "Follow-up automático", "Reativação de clientes"],
        metric: "+28% conversão",
        outcome: "Mais vendas fechadas",
    },
    UseCase {
        icon: "📞",
        title: "ATENDIMENTO",
        subtitle: "Suporte 24/7",
        tasks: ["Respostas instantâneas", "Agendamento inteligente", "Triagem de solicitações"],
        metric: "1min resposta",
        outcome: "Satisfação máxima",
    },
    UseCase {
        icon: "💲",
        title: "FINANCEIRO",
        subtitle: "Gestão Automatizada",
        tasks: ["Cobranças proativas", "Emissão de boletos", "Conciliação bancária"],
        metric: "-50% inadimplência",
        outcome: "Cashflow saudável",
    },
    UseCase {
        icon: "📦",
        title: "OPERACIONAL",
        subtitle: "Logística Eficiente",
        tasks: ["Rastreamento de pedidos", "Gestão de estoque", "Notificações automáticas"],
        metric: "-40% erros",
        outcome: "Processos otimizados",
    },
    UseCase {
        icon: "📄",
        title: "BACKOFFICE",
        subtitle: "Documentação Ágil",
        tasks: ["Processamento de docs", "Geração de relatórios", "Extração de dados"],
        metric: "70% tempo economizado",
        outcome: "Foco no estratégico",
    },
    UseCase {
        icon: "🎯",
        title: "PERSONALIZADO",
        subtitle: "Sua Necessidade",
        tasks: ["Processo específico", "Integração customizada", "Fluxo sob medida"],
        metric: "100% adaptável",
        outcome: "Solução única",
    },
];

fn use_case_card(case: &UseCase) -> Html {
    html! {
        <Card padding={CardPadding::Lg} class="use-case">
            <CardContent>
                <div class="use-case__head">
                    <span class="use-case__icon" aria-hidden="true">{case.icon}</span>
                    <div>
                        <CardTitle>{case.title}</CardTitle>
                        <p class="use-case__subtitle">{case.subtitle}</p>
                    </div>
                </div>
                <ul class="use-case__tasks">
                    { for case.tasks.iter().map(|task| html! { <li>{*task}</li> }) }
                </ul>
                <div class="use-case__metric">
                    <strong>{case.metric}</strong>
                    <span aria-hidden="true">{" → "}</span>
                    <span>{case.outcome}</span>
                </div>
            </CardContent>
            <CardFooter>
                <Button
                    variant={ButtonVariant::Secondary}
                    aria_label={format!("Explorar solução {}", case.title)}
                    onclick={Some(on_section_cta(CONTACT_SECTION_ID, "use_case"))}
                >
                    {"EXPLORAR"}
                </Button>
            </CardFooter>
        </Card>
    }
}

#[function_component(UseCases)]
pub fn use_cases() -> Html {
    let viewport = use_viewport();
    let tabs = use_reducer(|| Disclosure::with_open(OpenPolicy::Single, 0usize));

    let body = if viewport.mobile {
        html! {
            <>
                <div class="use-cases__tabs" role="tablist">
                    { for USE_CASES.iter().enumerate().map(|(i, case)| {
                        let selected = tabs.is_open(&i);
                        let onclick = {
                            let tabs = tabs.clone();
                            Callback::from(move |_: MouseEvent| tabs.dispatch(DisclosureAction::Select(i)))
                        };
                        html! {
                            <button
                                role="tab"
                                class={classes!("use-cases__tab", selected.then_some("is-active"))}
                                aria-selected={if selected { "true" } else { "false" }}
                                aria-controls={format!("use-case-{}", i)}
                                {onclick}
                            >
                                {case.title}
                            </button>
                        }
                    }) }
                </div>
                { for USE_CASES.iter().enumerate().filter(|(i, _)| tabs.is_open(i)).map(|(i, case)| html! {
                    <div id={format!("use-case-{}", i)} role="tabpanel">
                        { use_case_card(case) }
                    </div>
                }) }
            </>
        }
    } else {
        html! {
            <div class="use-cases__grid">
                { for USE_CASES.iter().enumerate().map(|(i, case)| html! {
                    <Reveal delay_ms={150 * i as u32}>{ use_case_card(case) }</Reveal>
                }) }
            </div>
        }
    };

    html! {
        <Container tag={ContainerTag::Section} id="casos" vertical={ContainerVertical::Lg} class="use-cases">
            <Reveal track_as="use_cases" class="section-heading">
                <h2 id="usecases-heading">{"Agentes Para Cada Área do Seu Negócio"}</h2>
                <p>{"Soluções práticas que geram resultados mensuráveis desde o primeiro dia"}</p>
            </Reveal>
            { body }
            <div class="use-cases__footer">
                <p>{"Não encontrou o seu caso? Criamos soluções personalizadas."}</p>
                <Button size={ButtonSize::Lg} onclick={Some(on_section_cta(CONTACT_SECTION_ID, "use_cases"))}>
                    {"FALAR COM ESPECIALISTA"}
                </Button>
            </div>
            <style>
                {r#"
                .use-cases__grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .use-case { height: 100%; }
                .use-case__head { display: flex; gap: 1rem; align-items: center; }
                .use-case__icon { font-size: 2rem; }
                .use-case__subtitle { margin: 0; color: var(--muted); }
                .use-case__tasks { padding-left: 1.25rem; line-height: 1.8; }
                .use-case__metric { color: var(--accent); }
                .use-cases__tabs {
                    display: flex;
                    gap: 0.5rem;
                    overflow-x: auto;
                    margin-bottom: 1.5rem;
                }
                .use-cases__tab {
                    flex: none;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 2px solid var(--border);
                    background: var(--surface);
                    color: var(--text);
                    font-weight: 700;
                }
                .use-cases__tab.is-active { border-color: var(--accent); color: var(--accent); }
                .use-cases__footer { text-align: center; margin-top: 3rem; }
                @media (max-width: 1023px) {
                    .use-cases__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                }
                "#}
            </style>
        </Container>
    }
}
