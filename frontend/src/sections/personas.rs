use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent, CardFooter, CardPadding, CardTitle, CardVariant};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::links::on_section_cta;

struct Persona {
    icon: &'static str,
    title: &'static str,
    challenge: &'static str,
    solution: &'static str,
    case_example: &'static str,
    cta: &'static str,
    location: &'static str,
}

const PERSONAS: &[Persona] = &[
    Persona {
        icon: "💼",
        title: "CEOs e Empreendedores",
        challenge: "Crescer sem aumentar custo fixo de equipe",
        solution: "Agentes de IA atuam como colaboradores que escalam conforme demanda. Pague apenas pelo que usar.",
        case_example: "E-commerce aumentou 45% vendas sem contratar 1 vendedor adicional",
        cta: "Crescer Agora",
        location: "persona_ceo",
    },
    Persona {
        icon: "📊",
        title: "Gestores de Operações",
        challenge: "Padronizar processos e eliminar gargalos operacionais",
        solution: "Agentes executam fluxos de trabalho consistentemente, 24/7, sem variação de qualidade ou atrasos humanos.",
        case_example: "Distribuidora reduziu 60% erros em processos de estoque e expedição",
        cta: "Otimizar Processos",
        location: "persona_operations",
    },
    Persona {
        icon: "📈",
        title: "Diretores Comerciais",
        challenge: "Aumentar conversão e qualificar leads de forma escalável",
        solution: "Agentes qualificam leads, fazem follow-up imediato e nutrem prospects até o momento certo de venda.",
        case_example: "SaaS B2B aumentou 38% taxa de conversão com qualificação automática",
        cta: "Vender Mais",
        location: "persona_sales",
    },
];

#[function_component(Personas)]
pub fn personas() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="personas" vertical={ContainerVertical::Lg} class="personas">
            <Reveal track_as="personas" class="section-heading">
                <h2 id="personas-title">{"Criado Para Quem Faz a Empresa Acontecer"}</h2>
                <p>{"Soluções personalizadas para diferentes desafios do seu negócio"}</p>
            </Reveal>
            <div class="personas__grid">
                { for PERSONAS.iter().enumerate().map(|(i, p)| html! {
                    <Reveal delay_ms={150 * i as u32}>
                        <Card variant={CardVariant::Elevated} padding={CardPadding::Lg} class="persona">
                            <CardContent>
                                <div class="persona__icon" aria-hidden="true">{p.icon}</div>
                                <CardTitle>{p.title}</CardTitle>
                                <h4>{"Desafio"}</h4>
                                <p>{p.challenge}</p>
                                <h4>{"Solução ProceX AI"}</h4>
                                <p>{p.solution}</p>
                                <p class="persona__case">{p.case_example}</p>
                            </CardContent>
                            <CardFooter>
                                <Button
                                    variant={ButtonVariant::Link}
                                    onclick={Some(on_section_cta(CONTACT_SECTION_ID, p.location))}
                                >
                                    {p.cta}{" →"}
                                </Button>
                            </CardFooter>
                        </Card>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .personas__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .persona { height: 100%; }
                .persona__icon { font-size: 2rem; }
                .persona h4 {
                    margin: 1rem 0 0.25rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--muted);
                }
                .persona p { margin: 0; }
                .persona__case {
                    margin-top: 1rem;
                    padding: 0.75rem;
                    border-left: 3px solid var(--accent);
                    background: var(--bg);
                }
                "#}
            </style>
        </Container>
    }
}
