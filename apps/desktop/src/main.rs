//! CineScope Desktop — Dioxus-powered movie search.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod components;
mod search;
mod state;

use app::App;
use cinescope_core::{ProviderClient, ProviderConfig};

/// Pre-runtime storage — config is read before Dioxus launches, consumed on
/// first render.
pub static INITIAL_CLIENT: Mutex<Option<ProviderClient>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cinescope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Read provider config from the environment once — store in the Mutex,
    // NOT in the signal (no Dioxus runtime exists yet)
    let client = ProviderClient::new(ProviderConfig::from_env());
    *INITIAL_CLIENT.lock().unwrap() = Some(client);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((14, 14, 16, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("CineScope")
                            .with_inner_size(LogicalSize::new(560.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(420.0, 560.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
