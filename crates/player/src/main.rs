//! Tabletop Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabletop_player::config::ClientConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabletop_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Tabletop Player");

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration, falling back to defaults");
        ClientConfig::default()
    });
    tracing::debug!(api = %config.api_base_url, "Client configured");

    let services = tabletop_player::composition::default_services(&config);

    dioxus::LaunchBuilder::new()
        .with_context(services)
        .launch(tabletop_player::app);
}
