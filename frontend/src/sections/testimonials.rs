use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::{Card, CardContent, CardPadding};
use crate::components::container::{Container, ContainerTag, ContainerVertical};
use crate::components::reveal::Reveal;
use crate::interaction::media::use_viewport;
use crate::widgets::carousel::{Carousel, CarouselAction};

struct Testimonial {
    name: &'static str,
    company: &'static str,
    location: &'static str,
    quote: &'static str,
    metric: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Carlos Mendes",
        company: "E-commerce",
        location: "SP",
        quote: "32% de reativação de clientes inativos. O agente de follow-up trabalha 24/7 sem descanso.",
        metric: "+32%",
        avatar: "CM",
    },
    Testimonial {
        name: "Fernanda Oliveira",
        company: "Distribuidora",
        location: "PR",
        quote: "40 horas economizadas por mês em processos manuais. Nossa equipe agora foca no estratégico.",
        metric: "40h/mês",
        avatar: "FO",
    },
    Testimonial {
        name: "Rafael Costa",
        company: "SaaS",
        location: "SC",
        quote: "Atendimento 24/7 sem aumentar custos. NPS subiu 0.8 pontos em 3 meses com respostas instantâneas.",
        metric: "+0.8 NPS",
        avatar: "RC",
    },
    Testimonial {
        name: "Juliana Ramos",
        company: "Agência",
        location: "MG",
        quote: "Suporte excepcional. O especialista dedicado entende nosso negócio e evolui o agente continuamente.",
        metric: "Contínuo",
        avatar: "JR",
    },
];

fn testimonial_card(t: &Testimonial) -> Html {
    html! {
        <Card padding={CardPadding::Lg} class="testimonial">
            <CardContent>
                <div class="testimonial__person">
                    <span class="testimonial__avatar" aria-hidden="true">{t.avatar}</span>
                    <div>
                        <strong>{t.name}</strong>
                        <p>{format!("{} • {}", t.company, t.location)}</p>
                    </div>
                </div>
                <blockquote class="testimonial__quote">{t.quote}</blockquote>
                <Badge variant={BadgeVariant::Success}>{t.metric}</Badge>
            </CardContent>
        </Card>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let viewport = use_viewport();
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    let body = if viewport.mobile {
        let step = |action: fn() -> CarouselAction| {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
        };
        let current = carousel.current();
        html! {
            <div class="testimonials__carousel" aria-roledescription="carousel">
                { for TESTIMONIALS.get(current).map(testimonial_card) }
                <div class="testimonials__controls">
                    <button aria-label="Depoimento anterior" onclick={step(|| CarouselAction::Prev)}>{"‹"}</button>
                    { for (0..carousel.len()).map(|i| {
                        let carousel = carousel.clone();
                        let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)));
                        html! {
                            <button
                                class={classes!("testimonials__dot", (i == current).then_some("is-active"))}
                                aria-label={format!("Depoimento {}", i + 1)}
                                {onclick}
                            />
                        }
                    }) }
                    <button aria-label="Próximo depoimento" onclick={step(|| CarouselAction::Next)}>{"›"}</button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="testimonials__grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <Reveal delay_ms={100 * i as u32}>{ testimonial_card(t) }</Reveal>
                }) }
            </div>
        }
    };

    html! {
        <Container tag={ContainerTag::Section} id="depoimentos" vertical={ContainerVertical::Lg} class="testimonials">
            <Reveal track_as="testimonials" class="section-heading">
                <h2 id="testimonials-title">{"Resultados Reais de PMEs Como a Sua"}</h2>
                <p>{"Histórias reais de transformação digital"}</p>
            </Reveal>
            { body }
            <style>
                {r#"
                .testimonials__grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                }
                .testimonial__person { display: flex; gap: 1rem; align-items: center; }
                .testimonial__person p { margin: 0; color: var(--muted); font-size: 0.875rem; }
                .testimonial__avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 800;
                }
                .testimonial__quote { margin: 1.25rem 0; font-style: italic; line-height: 1.6; }
                .testimonials__controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .testimonials__controls button {
                    background: none;
                    border: 1px solid var(--border);
                    color: var(--text);
                    border-radius: 9999px;
                    min-width: 2rem;
                    height: 2rem;
                    cursor: pointer;
                }
                .testimonials__controls .testimonials__dot { min-width: 0.75rem; width: 0.75rem; height: 0.75rem; padding: 0; }
                .testimonials__dot.is-active { background: var(--accent); border-color: var(--accent); }
                "#}
            </style>
        </Container>
    }
}
