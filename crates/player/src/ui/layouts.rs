//! Layout components wrapping groups of routes.

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::routes::Route;
use super::services::use_services;
use crate::application::GuardDecision;

/// Outermost layout: follows redirect requests from the HTTP layer.
#[component]
pub fn RedirectListener() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    use_future(move || {
        let receiver = services.login_redirects.take_receiver();
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while receiver.next().await.is_some() {
                navigator.replace(Route::SignIn {});
            }
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}

/// Renders its routes only for a signed-in user.
///
/// The guard is evaluated on every render, so signing out anywhere sends the
/// next protected render to the sign-in page.
#[component]
pub fn Protected() -> Element {
    let services = use_services();

    match services.guard.check() {
        GuardDecision::Allow => rsx! {
            Shell {
                Outlet::<Route> {}
            }
        },
        GuardDecision::Redirect(path) => {
            tracing::debug!(path, "Protected route requires sign in");
            rsx! {
                RedirectToSignIn {}
            }
        }
    }
}

#[component]
fn RedirectToSignIn() -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(Route::SignIn {});
    });
    rsx! {}
}

/// Side menu plus content area for signed-in pages.
#[component]
fn Shell(children: Element) -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let logout = move |_| {
        let sessions = services.sessions.clone();
        spawn(async move {
            // The local session is gone either way; the error is already logged.
            let _ = sessions.logout().await;
            navigator.replace(Route::SignIn {});
        });
    };

    rsx! {
        div {
            class: "shell",
            nav {
                button {
                    id: "menu-button-games",
                    onclick: move |_| {
                        navigator.push(Route::GameList {});
                    },
                    "Games"
                }
                button {
                    id: "menu-button-users",
                    onclick: move |_| {
                        navigator.push(Route::UserList {});
                    },
                    "Users"
                }
                button {
                    id: "menu-button-profile",
                    onclick: move |_| {
                        navigator.push(Route::Profile {});
                    },
                    "Profile"
                }
                button {
                    id: "menu-button-logout",
                    onclick: logout,
                    "Log out"
                }
            }
            main {
                {children}
            }
        }
    }
}
