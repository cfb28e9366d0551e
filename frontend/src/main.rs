use log::info;
use yew::prelude::*;

mod config;
mod content;
mod state {
    pub mod carousel;
    pub mod navigation;
    pub mod registration;
    pub mod reveal;
    pub mod section;
}
mod web {
    pub mod scroll;
    pub mod transport;
    pub mod viewport;
}
mod components {
    pub mod header;
    pub mod icons;
    pub mod loader;
    pub mod registration_form;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod sections;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::default_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
