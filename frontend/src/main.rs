use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod animation;
mod config;
mod content;
mod visibility;
mod components {
    pub mod footer;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod mall;
}

use content::SiteContent;
use pages::mall::MallPage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <MallPage content={props.content.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct UnavailableProps {
    pub reason: AttrValue,
}

/// Shown instead of the page when the bundled copy cannot be loaded.
#[function_component]
fn Unavailable(props: &UnavailableProps) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; font-family: sans-serif; color: #1f2937;">
            <div style="text-align: center;">
                <h1 style="font-weight: 300;">{"Shopping Vila Bella"}</h1>
                <p style="color: #6b7280;">{"Página temporariamente indisponível."}</p>
                <p style="color: #9ca3af; font-size: 0.8rem;">{props.reason.clone()}</p>
            </div>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::bundled() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("Failed to load site content: {}", err);
            yew::Renderer::<Unavailable>::with_props(UnavailableProps {
                reason: err.to_string().into(),
            })
            .render();
        }
    }
}
