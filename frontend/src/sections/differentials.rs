use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, CardDescription, CardFooter, CardHeader, CardPadding, CardTitle};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;

const DIFFERENTIALS: &[(&str, &str, &str, &str)] = &[
    (
        "🧠",
        "HUB DE ESPECIALISTAS",
        "Cada projeto = profissional dedicado do setor. Não é template, é personalizado.",
        "Experiência real, não automação genérica",
    ),
    (
        "⚡",
        "14 DIAS GARANTIDO",
        "Metodologia testada, resultados na semana 1. Não meses como projetos de TI tradicionais.",
        "Velocidade sem comprometer qualidade",
    ),
    (
        "🤝",
        "SUPORTE CONTÍNUO",
        "Especialista fica disponível para evolução. Não é número genérico de suporte.",
        "Parceria de longo prazo, não transação",
    ),
];

#[function_component(Differentials)]
pub fn differentials() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="recursos" vertical={ContainerVertical::Lg} class="differentials">
            <Reveal track_as="differentials" class="section-heading">
                <h2 id="differentials-heading">{"Não Somos Consultoria Tradicional. Conectamos ao Especialista."}</h2>
                <p>{"Consultoria boutique + agilidade startup"}</p>
            </Reveal>
            <div class="differentials__grid">
                { for DIFFERENTIALS.iter().enumerate().map(|(i, (icon, title, description, highlight))| html! {
                    <Reveal delay_ms={200 * i as u32}>
                        <Card padding={CardPadding::Lg} class="differentials__card">
                            <CardHeader>
                                <div class="differentials__icon" aria-hidden="true">{*icon}</div>
                                <CardTitle>{*title}</CardTitle>
                            </CardHeader>
                            <CardDescription>{*description}</CardDescription>
                            <CardFooter>
                                <Badge variant={BadgeVariant::Accent}>{*highlight}</Badge>
                            </CardFooter>
                        </Card>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .differentials__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .differentials__card { height: 100%; transition: transform 0.2s ease; }
                .differentials__card:hover { transform: translateY(-8px); }
                .differentials__icon { font-size: 2.25rem; margin-bottom: 1rem; }
                "#}
            </style>
        </Container>
    }
}
