//! Post Card Component
//!
//! One post in the feed: header, body, reaction/comment counts, the reactions
//! popup, the action bar and the comment panel.
//!
//! All interaction state lives in a [`CardSession`]. Every UI event is turned
//! into a [`CardEvent`] and dispatched; the returned view is rendered. The
//! reaction picker's delayed close happens on the session's own timer, so the
//! component also follows the session's view channel.

use std::sync::Arc;

use dioxus::prelude::*;
use dof3a_core::{CardConfig, CardEvent, CardSession, CardView, PostCard, PostDetails, ViewerId};

use super::{CommentPanel, ReactionBar, ReactsPopup};

/// Counts row label, e.g. "3 Reacts".
pub(crate) fn count_label(count: usize, noun: &str) -> String {
    format!("{} {}", count, noun)
}

#[component]
pub fn PostCardView(details: PostDetails, viewer: ViewerId, card_config: CardConfig) -> Element {
    let session: Signal<Arc<CardSession>> = use_signal(|| {
        CardSession::new(PostCard::new(details.clone(), viewer.clone()), card_config)
    });
    let mut view: Signal<CardView> = use_signal(|| session.peek().view());

    // Follow views published by the session, including timer-driven closes
    use_effect(move || {
        let mut views = session.peek().subscribe();
        spawn(async move {
            while views.changed().await.is_ok() {
                let latest = views.borrow_and_update().clone();
                view.set(latest);
            }
        });
    });

    let on_event = EventHandler::new(move |event: CardEvent| {
        tracing::debug!(?event, "Card event");
        let latest = session.peek().dispatch(event);
        view.set(latest);
    });

    let current = view.read().clone();
    let post = &current.post;
    let reacts_label = count_label(current.total_reactions, "Reacts");
    let comments_label = count_label(current.comment_count(), "Comments");

    rsx! {
        article { class: "post-card",
            div { class: "post-header",
                img { class: "avatar", src: "{post.poster_avatar}", alt: "Profile" }
                div {
                    div { class: "post-poster", "{post.poster_name}" }
                    div { class: "post-time", "{current.posted_label}" }
                }
            }

            div { class: "post-body",
                p { class: "post-content", "{post.content}" }
                if let Some(ref image) = post.post_image {
                    img { class: "post-image", src: "{image}", alt: "Post" }
                }
            }

            div { class: "post-counts",
                button {
                    r#type: "button",
                    onclick: move |_| on_event.call(CardEvent::ReactsTogglePressed),
                    "{reacts_label}"
                }
                button {
                    r#type: "button",
                    onclick: move |_| on_event.call(CardEvent::CommentsTogglePressed),
                    "{comments_label}"
                }
            }

            ReactsPopup {
                rosters: current.rosters.clone(),
                open: current.reaction_popup_open,
            }

            hr { class: "post-divider" }

            ReactionBar {
                viewer_reaction: current.viewer_reaction,
                menu_open: current.reaction_menu_open,
                on_event,
            }

            CommentPanel {
                comments: current.comments.clone(),
                draft: current.comment_draft.clone(),
                open: current.comment_panel_open,
                on_event,
            }
        }
    }
}
