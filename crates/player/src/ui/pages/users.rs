//! User directory page

use dioxus::prelude::*;
use tabletop_domain::Page;

use crate::ui::services::use_services;

#[component]
pub fn UserList() -> Element {
    let services = use_services();

    let users = use_resource(move || {
        let service = services.users.clone();
        async move { service.list(Page::default()).await }
    });

    let listing = match &*users.read() {
        None => rsx! { div { "Loading..." } },
        Some(Err(e)) => rsx! { div { class: "error", "Failed to load users: {e}" } },
        Some(Ok(list)) => rsx! {
            div {
                for user in list.iter() {
                    div {
                        key: "{user.id()}",
                        div { "{user.fullname()}" }
                        div { "{user.email()}" }
                    }
                }
            }
        },
    };

    rsx! {
        h1 { "Users" }
        {listing}
    }
}
