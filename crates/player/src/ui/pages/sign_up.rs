//! Sign-up page

use dioxus::prelude::*;

use super::VERSION;
use crate::ui::routes::Route;
use crate::ui::services::use_services;

#[component]
pub fn SignUp() -> Element {
    let services = use_services();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_pending = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    let submit = move |_| {
        let email_val = email.read().clone();
        let password_val = password.read().clone();
        let registration = services.registration.clone();

        is_pending.set(true);
        error_message.set(None);
        notice.set(None);

        spawn(async move {
            match registration.register(&email_val, &password_val).await {
                Ok(()) => notice.set(Some("Account created, you can sign in now".to_string())),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            // The form is cleared after every attempt.
            email.set(String::new());
            password.set(String::new());
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card",
                h1 { "Create account" }

                div {
                    class: "field",
                    label { r#for: "signup-email", "Enter your email" }
                    input {
                        id: "signup-email",
                        r#type: "text",
                        autocomplete: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div {
                    class: "field",
                    label { r#for: "signup-password", "Enter your password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                if let Some(err) = error_message.read().as_ref() {
                    div { class: "error", "{err}" }
                }
                if let Some(msg) = notice.read().as_ref() {
                    div { class: "notice", "{msg}" }
                }

                button {
                    id: "signup-submit",
                    class: "primary",
                    disabled: *is_pending.read(),
                    onclick: submit,
                    if *is_pending.read() { "Signing up..." } else { "Sign up" }
                }

                div {
                    style: "display: flex; justify-content: center; margin-top: 1.25rem;",
                    Link { to: Route::SignIn {}, "Sign in" }
                }
            }
            h2 { "Version {VERSION}" }
        }
    }
}
