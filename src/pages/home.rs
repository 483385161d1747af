//! Home page: navbar, sidebar, and the post feed.

use dioxus::prelude::*;
use dof3a_core::Feed;

use crate::components::{Navbar, PostCardView, Sidebar};
use crate::context::use_feed_config;

#[component]
pub fn Home() -> Element {
    let config = use_feed_config();

    // Built once; each card keeps its own session afterwards
    let feed = use_hook(|| {
        let feed = Feed::from_config(&config.peek());
        tracing::info!(posts = feed.len(), viewer = %feed.viewer(), "Feed loaded");
        feed
    });

    let viewer = feed.viewer().clone();
    let card_config = feed.card_config();

    rsx! {
        Navbar {}
        Sidebar { viewer: viewer.clone() }

        main { class: "feed-main",
            if feed.is_empty() {
                p { class: "feed-empty", "No posts yet." }
            }
            for card in feed.cards() {
                PostCardView {
                    key: "{card.id()}",
                    details: card.details().clone(),
                    viewer: viewer.clone(),
                    card_config,
                }
            }
        }
    }
}
