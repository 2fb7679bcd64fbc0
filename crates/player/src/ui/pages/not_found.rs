use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, "Back to games" }
        }
    }
}
