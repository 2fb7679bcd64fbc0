//! Game list page, also served at the root route

use dioxus::prelude::*;
use tabletop_domain::Page;

use crate::ui::services::use_services;

#[component]
pub fn Home() -> Element {
    rsx! {
        GameList {}
    }
}

#[component]
pub fn GameList() -> Element {
    let services = use_services();

    let game_service = services.games.clone();
    let mut games = use_resource(move || {
        let service = game_service.clone();
        async move { service.list(Page::default()).await }
    });

    let mut new_name = use_signal(String::new);
    let mut create_error: Signal<Option<String>> = use_signal(|| None);

    let create = move |_| {
        let name = new_name.read().clone();
        let service = services.games.clone();
        create_error.set(None);

        spawn(async move {
            match service.create(&name).await {
                Ok(_) => {
                    new_name.set(String::new());
                    games.restart();
                }
                Err(e) => create_error.set(Some(e.to_string())),
            }
        });
    };

    let listing = match &*games.read() {
        None => rsx! { div { "Loading..." } },
        Some(Err(e)) => rsx! { div { class: "error", "Failed to load games: {e}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { div { "No games yet" } },
        Some(Ok(list)) => rsx! {
            div {
                for game in list.iter() {
                    div {
                        key: "{game.id()}",
                        div { "{game.id()}" }
                        div { "{game.name()}" }
                    }
                }
            }
        },
    };

    rsx! {
        h1 { "Games" }

        div {
            class: "field",
            input {
                id: "game-name",
                r#type: "text",
                placeholder: "New game name",
                value: "{new_name}",
                oninput: move |e| new_name.set(e.value()),
            }
            button {
                id: "game-create",
                onclick: create,
                "Create"
            }
        }
        if let Some(err) = create_error.read().as_ref() {
            div { class: "error", "{err}" }
        }

        {listing}
    }
}
