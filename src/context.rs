//! Feed configuration context.
//!
//! The desktop binary resolves a [`FeedConfig`] from the command line before
//! launch; [`App`](crate::app::App) provides it to the component tree.
//!
//! ```ignore
//! let config = use_feed_config();
//! let viewer = config.read().viewer_id();
//! ```

use dioxus::prelude::*;
use dof3a_core::FeedConfig;

/// Config resolved at startup, or the built-in feed.
pub fn startup_config() -> FeedConfig {
    crate::get_feed_config()
}

/// Hook to access the feed config from context.
pub fn use_feed_config() -> Signal<FeedConfig> {
    use_context::<Signal<FeedConfig>>()
}
