use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::card::{Card, CardPadding};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;

struct Metric {
    icon: &'static str,
    value: f64,
    suffix: &'static str,
    label: &'static str,
    description: &'static str,
}

const METRICS: &[Metric] = &[
    Metric {
        icon: "📈",
        value: 320.0,
        suffix: "%",
        label: "ROI no 1º Ano",
        description: "Retorno sobre investimento comprovado",
    },
    Metric {
        icon: "⚡",
        value: 14.0,
        suffix: " dias",
        label: "Implementação",
        description: "Do diagnóstico ao go-live garantido",
    },
    Metric {
        icon: "🏢",
        value: 50.0,
        suffix: "+",
        label: "Empresas Transformadas",
        description: "PMEs crescendo com IA",
    },
    Metric {
        icon: "★",
        value: 4.8,
        suffix: "/5",
        label: "Satisfação",
        description: "Avaliação média dos clientes",
    },
];

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="resultados" vertical={ContainerVertical::Lg} class="metrics">
            <Reveal track_as="metrics" class="section-heading">
                <h2 id="metrics-title">{"IA Que Entrega Resultados Mensuráveis"}</h2>
                <p>{"Números reais de transformação digital em PMEs brasileiras"}</p>
            </Reveal>
            <div class="metrics__grid">
                { for METRICS.iter().map(|m| html! {
                    <Card padding={CardPadding::Lg} class="metric">
                        <div class="metric__icon" aria-hidden="true">{m.icon}</div>
                        <div class="metric__value" aria-live="polite">
                            <AnimatedCounter target={m.value} suffix={m.suffix} />
                        </div>
                        <h3 class="metric__label">{m.label}</h3>
                        <p class="metric__description">{m.description}</p>
                    </Card>
                }) }
            </div>
            <p class="metrics__note">
                {"Todos os números são baseados em dados reais de clientes ativos. Métricas atualizadas mensalmente."}
            </p>
            <style>
                {r#"
                .metrics__grid {
                    display: grid;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                    gap: 1.25rem;
                }
                .metric { text-align: center; }
                .metric__icon { font-size: 1.75rem; }
                .metric__value {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 800;
                    color: var(--accent);
                    font-variant-numeric: tabular-nums;
                }
                .metric__label { margin: 0.5rem 0 0.25rem; }
                .metric__description { margin: 0; color: var(--muted); }
                .metrics__note { text-align: center; color: var(--muted); font-size: 0.875rem; margin-top: 2rem; }
                @media (max-width: 1023px) {
                    .metrics__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                }
                "#}
            </style>
        </Container>
    }
}
