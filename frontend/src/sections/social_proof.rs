use yew::prelude::*;

use crate::components::badge::{Badge, BadgeGroup, BadgeSize, BadgeVariant};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;

const SECTORS: &[(&str, &str, BadgeVariant)] = &[
    ("🛒", "E-commerce", BadgeVariant::Accent),
    ("📦", "Distribuição", BadgeVariant::Secondary),
    ("💼", "Serviços", BadgeVariant::Outline),
    ("🏪", "Varejo", BadgeVariant::Accent),
    ("🏢", "B2B", BadgeVariant::Secondary),
    ("🚚", "Logística", BadgeVariant::Outline),
];

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="social-proof" vertical={ContainerVertical::Sm} class="social-proof">
            <Reveal track_as="social_proof">
                <h2 class="social-proof__title">{"Confiado por empresas de diversos setores"}</h2>
            </Reveal>
            <BadgeGroup class="social-proof__sectors">
                { for SECTORS.iter().enumerate().map(|(i, (icon, label, variant))| html! {
                    <Reveal delay_ms={100 * i as u32}>
                        <Badge variant={*variant} size={BadgeSize::Lg} icon={html! { {*icon} }}>
                            {*label}
                        </Badge>
                    </Reveal>
                }) }
            </BadgeGroup>
            <p class="social-proof__note">
                {"Mais de 50 PMEs já transformaram suas operações com agentes de IA personalizados"}
            </p>
            <style>
                {r#"
                .social-proof { text-align: center; }
                .social-proof__title {
                    font-size: 1rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: var(--muted);
                }
                .social-proof__sectors { justify-content: center; gap: 1rem; margin: 2rem 0; }
                .social-proof__note { color: var(--muted); }
                "#}
            </style>
        </Container>
    }
}
