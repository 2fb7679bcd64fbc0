//! Dioxus UI: router, layouts and pages.

use dioxus::prelude::*;

pub mod layouts;
pub mod pages;
pub mod routes;
pub mod services;

pub use routes::Route;
pub use services::{use_services, Services};

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("/assets/main.css"),
        }
        Router::<Route> {}
    }
}
