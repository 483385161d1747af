use dioxus::prelude::*;
use dof3a_core::FeedConfig;

use crate::context::startup_config;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The home feed
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the feed config, and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<FeedConfig> = use_signal(startup_config);
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
