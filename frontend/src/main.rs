use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod countdown;
mod theme;
mod ticker;
mod components {
    pub mod about;
    pub mod community;
    pub mod countdown_panel;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod newsletter;
    pub mod roadmap;
    pub mod token_chart;
    pub mod tokenomics;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        // Single page site, anything else goes back to the top
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
