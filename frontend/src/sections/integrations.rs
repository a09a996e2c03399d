use yew::prelude::*;

use crate::components::badge::{Badge, BadgeGroup, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize};
use crate::components::card::{Card, CardContent, CardPadding, CardTitle, CardVariant};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::config::CONTACT_SECTION_ID;
use crate::links::on_section_cta;

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Comunicação", &["WhatsApp", "Telegram", "Gmail", "Outlook"]),
    ("E-commerce", &["Shopify", "WooCommerce", "Nuvemshop", "Mercado Livre"]),
    ("CRM", &["RD Station", "HubSpot", "Pipedrive", "Bitrix24"]),
    ("Financeiro", &["Asaas", "Pagar.me", "Bling", "Conta Azul"]),
    ("Produtividade", &["Google Workspace", "Microsoft 365", "Trello", "Notion"]),
    ("ERP", &["Tiny ERP", "SAP", "TOTVS", "APIs Customizadas"]),
];

const PROTOCOLS: &[&str] = &["APIs REST", "Webhooks", "GraphQL", "SOAP"];

const STATS: &[(&str, &str)] = &[
    ("24+", "Integrações Nativas"),
    ("5 dias", "Para Integrações Custom"),
    ("100%", "Compatibilidade Garantida"),
];

#[function_component(Integrations)]
pub fn integrations() -> Html {
    html! {
        <Container tag={ContainerTag::Section} id="integracoes" vertical={ContainerVertical::Lg} class="integrations">
            <Reveal track_as="integrations" class="section-heading">
                <h2 id="integrations-title">{"Conecta com as Ferramentas Que Você Já Usa"}</h2>
                <p>{"Integrações nativas com as principais plataformas do mercado brasileiro"}</p>
            </Reveal>

            <div class="integrations__grid">
                { for CATEGORIES.iter().enumerate().map(|(i, (name, tools))| html! {
                    <Reveal delay_ms={100 * i as u32}>
                        <Card padding={CardPadding::Default}>
                            <CardTitle>{*name}</CardTitle>
                            <CardContent>
                                <BadgeGroup>
                                    { for tools.iter().map(|tool| html! {
                                        <Badge variant={BadgeVariant::Outline}>{*tool}</Badge>
                                    }) }
                                </BadgeGroup>
                            </CardContent>
                        </Card>
                    </Reveal>
                }) }
            </div>

            <Reveal>
                <Card variant={CardVariant::Elevated} padding={CardPadding::Lg} class="integrations__custom">
                    <div>
                        <CardTitle>{"Não Achou Sua Ferramenta?"}</CardTitle>
                        <p>
                            {"Criamos integrações customizadas via API para qualquer sistema. Se sua ferramenta tem API, conectamos em até 5 dias úteis."}
                        </p>
                        <BadgeGroup>
                            { for PROTOCOLS.iter().map(|p| html! {
                                <Badge variant={BadgeVariant::Accent} size={BadgeSize::Sm}>{*p}</Badge>
                            }) }
                        </BadgeGroup>
                    </div>
                    <Button
                        size={ButtonSize::Lg}
                        aria_label="Falar com Especialista sobre Integrações Customizadas"
                        onclick={Some(on_section_cta(CONTACT_SECTION_ID, "integrations"))}
                    >
                        {"Falar com Especialista"}
                    </Button>
                </Card>
            </Reveal>

            <div class="integrations__stats">
                { for STATS.iter().map(|(value, label)| html! {
                    <div><strong>{*value}</strong><span>{*label}</span></div>
                }) }
            </div>

            <style>
                {r#"
                .integrations__grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.25rem;
                    margin-bottom: 2rem;
                }
                .integrations__custom {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .integrations__stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 2.5rem;
                    text-align: center;
                }
                .integrations__stats div { display: flex; flex-direction: column; }
                .integrations__stats strong { font-size: 2rem; color: var(--accent); }
                @media (max-width: 1023px) {
                    .integrations__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    .integrations__custom { flex-direction: column; align-items: flex-start; }
                }
                @media (max-width: 767px) {
                    .integrations__grid { grid-template-columns: 1fr; }
                    .integrations__stats { flex-direction: column; gap: 1.25rem; }
                }
                "#}
            </style>
        </Container>
    }
}
