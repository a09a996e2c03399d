use yew::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::card::{Card, CardContent, CardPadding, CardTitle, CardVariant};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::links::on_section_cta;

struct Challenge {
    icon: &'static str,
    problem: &'static str,
    problem_detail: &'static str,
    solution: &'static str,
    solution_detail: &'static str,
}

const CHALLENGES: &[Challenge] = &[
    Challenge {
        icon: "💰",
        problem: "Crescer Aumenta Custos",
        problem_detail: "Contratar mais pessoas significa mais custos fixos e gestão complexa",
        solution: "Agentes de IA escaláveis",
        solution_detail: "Multiplique capacidade sem aumentar headcount. Pague por uso.",
    },
    Challenge {
        icon: "⏱",
        problem: "Processos Manuais Drenam Produtividade",
        problem_detail: "Time perde 40h/mês em tarefas repetitivas que não geram valor",
        solution: "Automação inteligente 24/7",
        solution_detail: "IA executa tarefas repetitivas enquanto seu time foca no estratégico.",
    },
    Challenge {
        icon: "🔧",
        problem: "Falta Expertise em Tech",
        problem_detail: "Não tem time de TI ou orçamento para projetos complexos de IA",
        solution: "Especialistas dedicados",
        solution_detail: "Conectamos você ao especialista certo. Implementação em 14 dias.",
    },
];

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="problema" vertical={ContainerVertical::Lg} class="problems">
            <Reveal track_as="problem_solution" class="section-heading">
                <h2>{"Pequenas Empresas, Grandes Desafios"}</h2>
                <p>{"Você não está sozinho. Estes são os desafios mais comuns de PMEs e como IA resolve cada um."}</p>
            </Reveal>

            <div class="problems__grid">
                { for CHALLENGES.iter().enumerate().map(|(i, c)| html! {
                    <Reveal delay_ms={200 * i as u32}>
                        <Card variant={CardVariant::Elevated} padding={CardPadding::Lg}>
                            <CardContent>
                                <div class="problems__icon" aria-hidden="true">{c.icon}</div>
                                <CardTitle>{c.problem}</CardTitle>
                                <p class="problems__detail">{c.problem_detail}</p>
                                <div class="problems__arrow" aria-hidden="true">{"↓"}</div>
                                <h4 class="problems__solution">{c.solution}</h4>
                                <p>{c.solution_detail}</p>
                            </CardContent>
                        </Card>
                    </Reveal>
                }) }
            </div>

            <div class="problems__cta">
                <Button size={ButtonSize::Lg} onclick={Some(on_section_cta(CONTACT_SECTION_ID, "problem_solution"))}>
                    {"DESCOBRIR QUANTO POSSO ECONOMIZAR"}
                </Button>
                <p>{"Diagnóstico gratuito • 30 minutos • Sem compromisso"}</p>
            </div>

            <style>
                {r#"
                .section-heading { text-align: center; max-width: 760px; margin: 0 auto 3rem; }
                .section-heading h2 { font-size: clamp(1.875rem, 4vw, 3rem); margin: 0 0 1rem; }
                .section-heading p { color: var(--muted); font-size: 1.125rem; margin: 0; }
                .problems__grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .problems__icon { font-size: 2rem; margin-bottom: 1rem; }
                .problems__detail { color: var(--muted); }
                .problems__arrow { color: var(--accent); font-size: 1.5rem; margin: 0.75rem 0; }
                .problems__solution { color: var(--accent); margin: 0 0 0.5rem; }
                .problems__cta { text-align: center; margin-top: 3rem; }
                .problems__cta p { color: var(--muted); font-size: 0.875rem; }
                @media (max-width: 767px) {
                    .problems__grid {
                        grid-template-columns: none;
                        grid-auto-flow: column;
                        grid-auto-columns: 85%;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                    }
                    .problems__grid > * { scroll-snap-align: center; }
                }
                "#}
            </style>
        </Container>
    }
}
