//! Sign-in page

use dioxus::prelude::*;

use super::VERSION;
use crate::ui::routes::Route;
use crate::ui::services::use_services;

#[component]
pub fn SignIn() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_pending = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        let email_val = email.read().clone();
        let password_val = password.read().clone();
        let sessions = services.sessions.clone();

        is_pending.set(true);
        error_message.set(None);

        spawn(async move {
            match sessions.login(&email_val, &password_val).await {
                Ok(_) => {
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                    email.set(String::new());
                    password.set(String::new());
                }
            }
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card",
                h1 { "Login" }

                div {
                    class: "field",
                    label { r#for: "login-email", "Enter your email" }
                    input {
                        id: "login-email",
                        r#type: "text",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div {
                    class: "field",
                    label { r#for: "login-password", "Enter your password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                if let Some(err) = error_message.read().as_ref() {
                    div { class: "error", "{err}" }
                }

                button {
                    id: "login-submit",
                    class: "primary",
                    disabled: *is_pending.read(),
                    onclick: submit,
                    if *is_pending.read() { "Signing in..." } else { "Sign in" }
                }

                div {
                    style: "display: flex; justify-content: center; margin-top: 1.25rem;",
                    Link { to: Route::SignUp {}, "Create Account" }
                }
            }
            h2 { "Version {VERSION}" }
        }
    }
}
