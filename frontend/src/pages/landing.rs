use yew::prelude::*;

use crate::analytics::{use_scroll_depth_tracking, use_time_on_page};
use crate::components::button::ButtonVariant;
use crate::components::sticky_cta::StickyMobileCta;
use crate::config::CONTACT_SECTION_ID;
use crate::interaction::scroll::scroll_to_section;
use crate::sections::{
    cta_final::CtaFinal, differentials::Differentials, faq::Faq, footer::Footer, header::Header,
    hero::Hero, how_it_works::HowItWorks, integrations::Integrations, metrics::Metrics,
    personas::Personas, problem_solution::ProblemSolution, social_proof::SocialProof,
    testimonials::Testimonials, use_cases::UseCases,
};

/// The whole marketing page, sections in their fixed order.
#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_depth_tracking();
    use_time_on_page();

    let to_contact = Callback::from(|_: ()| {
        scroll_to_section(CONTACT_SECTION_ID);
    });

    html! {
        <div class="landing">
            <Header />
            <main>
                <Hero />
                <SocialProof />
                <ProblemSolution />
                <Differentials />
                <UseCases />
                <HowItWorks />
                <Testimonials />
                <Personas />
                <Integrations />
                <Metrics />
                <Faq />
                <CtaFinal />
            </main>
            <Footer />
            <StickyMobileCta
                text="AGENDAR DIAGNÓSTICO"
                variant={ButtonVariant::Primary}
                message="Descubra como otimizar seus dados"
                on_click={to_contact}
            />
        </div>
    }
}
