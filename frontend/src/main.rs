use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod theme;
mod analytics;
mod links;
mod interaction {
    pub mod subscription;
    pub mod frame;
    pub mod scroll;
    pub mod viewport;
    pub mod media;
}
mod widgets {
    pub mod disclosure;
    pub mod carousel;
    pub mod counter;
}
mod form {
    pub mod validation;
    pub mod state;
    pub mod transport;
    pub mod newsletter;
}
mod components {
    pub mod styles;
    pub mod button;
    pub mod card;
    pub mod input;
    pub mod badge;
    pub mod container;
    pub mod reveal;
    pub mod animated_counter;
    pub mod sticky_cta;
    pub mod contact_form;
}
mod sections {
    pub mod header;
    pub mod hero;
    pub mod social_proof;
    pub mod problem_solution;
    pub mod differentials;
    pub mod use_cases;
    pub mod how_it_works;
    pub mod testimonials;
    pub mod personas;
    pub mod integrations;
    pub mod metrics;
    pub mod faq;
    pub mod cta_final;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod legal;
}

use components::styles::GlobalStyles;
use interaction::media::{use_viewport_source, Viewport};
use pages::{
    landing::Landing,
    legal::{LgpdNotice, PrivacyPolicy, TermsOfUse},
};
use theme::ThemeProvider;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacidade")]
    Privacy,
    #[at("/termos")]
    Terms,
    #[at("/lgpd")]
    Lgpd,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        },
        Route::Lgpd => {
            info!("Rendering LGPD page");
            html! { <LgpdNotice /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let viewport = use_viewport_source();

    html! {
        <ThemeProvider>
            <ContextProvider<Viewport> context={viewport}>
                <GlobalStyles />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Viewport>>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
