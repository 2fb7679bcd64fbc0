//! Signed-in user's profile

use dioxus::prelude::*;

use crate::ui::services::use_services;

#[component]
pub fn Profile() -> Element {
    let services = use_services();

    let profile = use_resource(move || {
        let service = services.users.clone();
        async move { service.profile().await }
    });

    let details = match &*profile.read() {
        None => rsx! { div { "Loading..." } },
        Some(Err(e)) => rsx! { div { class: "error", "Failed to load profile: {e}" } },
        Some(Ok(user)) => rsx! {
            div { "{user.id()}" }
            div { "{user.email()}" }
            div { "{user.fullname()}" }
        },
    };

    rsx! {
        h1 { "Profile" }
        {details}
    }
}
