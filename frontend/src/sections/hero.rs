use yew::prelude::*;

use crate::components::badge::{Badge, BadgeGroup, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::container::{Container, ContainerSize, ContainerTag, ContainerVertical};
use crate::config::CONTACT_SECTION_ID;
use crate::interaction::frame::request_frames_or_settle;
use crate::interaction::media::{use_viewport, Viewport};
use crate::links::on_section_cta;

const HEADLINE: &str = "Agentes de IA Personalizados em 14 Dias";

const BULLETS: &[(&str, &str)] = &[
    ("✓", "14 dias até operação"),
    ("👥", "Especialistas dedicados"),
    ("✓", "Zero infraestrutura"),
    ("⏱", "ROI em 90 dias"),
];

const TRUST_BADGES: &[(&str, &str, BadgeVariant)] = &[
    ("👥", "50+ PMEs", BadgeVariant::Accent),
    ("★", "4.8/5", BadgeVariant::Secondary),
    ("⏱", "40h/mês economizadas", BadgeVariant::Outline),
];

/// Delay between headline words.
pub fn word_stagger_ms(viewport: &Viewport) -> u32 {
    if viewport.reduced_motion {
        50
    } else if viewport.mobile {
        100
    } else {
        150
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let viewport = use_viewport();
    let shown = use_state_eq(|| false);

    // one frame after mount so the entrance transition has a start state
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let on_frame = shown.clone();
                let frame = request_frames_or_settle(
                    move |_| {
                        on_frame.set(true);
                        false
                    },
                    || shown.set(true),
                );
                move || drop(frame)
            },
            (),
        );
    }

    let stagger = word_stagger_ms(&viewport);
    let words = HEADLINE.split_whitespace().enumerate().map(|(i, word)| {
        let delay = stagger * i as u32;
        html! {
            <span class="hero__word" style={format!("transition-delay: {}ms;", delay)}>
                {word}{" "}
            </span>
        }
    });

    html! {
        <Container
            tag={ContainerTag::Section}
            id="hero"
            size={ContainerSize::Xl}
            vertical={ContainerVertical::Hero}
            class={classes!("hero", shown.then_some("hero--shown"))}
        >
            <h1 class="hero__title">{ for words }</h1>
            <p class="hero__subtitle">{"Conectamos sua PME aos especialistas certos"}</p>

            <ul class="hero__bullets">
                { for BULLETS.iter().map(|(icon, text)| html! {
                    <li><span aria-hidden="true">{*icon}</span>{*text}</li>
                }) }
            </ul>

            <div class="hero__ctas">
                <Button size={ButtonSize::Lg} onclick={Some(on_section_cta(CONTACT_SECTION_ID, "hero"))}>
                    {"DIAGNÓSTICO GRATUITO"}
                </Button>
                <Button
                    variant={ButtonVariant::Secondary}
                    size={ButtonSize::Lg}
                    onclick={Some(on_section_cta("como-funciona", "hero_secondary"))}
                >
                    {"Ver Como Funciona"}
                </Button>
            </div>

            <BadgeGroup class="hero__badges">
                { for TRUST_BADGES.iter().map(|(icon, text, variant)| html! {
                    <Badge variant={*variant} size={BadgeSize::Lg} icon={html! { {*icon} }}>
                        {*text}
                    </Badge>
                }) }
            </BadgeGroup>

            <style>
                {r#"
                .hero { padding-top: 9rem; text-align: center; }
                .hero__title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin: 0 auto 1.5rem;
                    max-width: 900px;
                }
                .hero__word {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(60%);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .hero--shown .hero__word { opacity: 1; transform: none; }
                .hero__subtitle { font-size: 1.25rem; color: var(--muted); margin-bottom: 2rem; }
                .hero__bullets {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 0.75rem 2rem;
                    max-width: 560px;
                    margin: 0 auto 2.5rem;
                    text-align: left;
                }
                .hero__bullets li { display: flex; gap: 0.5rem; font-weight: 600; }
                .hero__ctas { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .hero__badges { justify-content: center; margin-top: 2.5rem; }
                @media (max-width: 767px) {
                    .hero { padding-top: 7rem; }
                    .hero__bullets { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </Container>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_tightens_on_mobile_and_reduced_motion() {
        let desktop = Viewport::default();
        let mobile = Viewport {
            mobile: true,
            ..Viewport::default()
        };
        let calm = Viewport {
            mobile: true,
            reduced_motion: true,
            ..Viewport::default()
        };
        assert_eq!(word_stagger_ms(&desktop), 150);
        assert_eq!(word_stagger_ms(&mobile), 100);
        assert_eq!(word_stagger_ms(&calm), 50);
    }
}
