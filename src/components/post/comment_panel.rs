//! Comment panel: composer on top, thread below.

use dioxus::prelude::*;
use dof3a_core::{CardEvent, Comment, DEFAULT_AVATAR};

use super::overlay_class;

/// Comment composer and list.
///
/// Content is only mounted while the panel is open, so the composer loses
/// focus when the panel closes. The draft itself lives in the card.
#[component]
pub fn CommentPanel(
    comments: Vec<Comment>,
    draft: String,
    open: bool,
    on_event: EventHandler<CardEvent>,
) -> Element {
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            on_event.call(CardEvent::CommentSubmitted);
        }
    };

    rsx! {
        div { class: overlay_class(open),
            if open {
                div { class: "comment-panel",
                    div { class: "comment-form",
                        input {
                            class: "comment-input",
                            r#type: "text",
                            placeholder: "Write a comment...",
                            value: "{draft}",
                            oninput: move |e| on_event.call(CardEvent::CommentDraftChanged { text: e.value() }),
                            onkeydown: on_keydown,
                        }
                        button {
                            class: "comment-post-btn",
                            r#type: "button",
                            onclick: move |_| on_event.call(CardEvent::CommentSubmitted),
                            "Post"
                        }
                    }

                    if comments.is_empty() {
                        p { class: "comment-empty", "No comments yet." }
                    } else {
                        ul { class: "comment-list",
                            for comment in comments {
                                li { key: "{comment.index}", class: "comment-item",
                                    img { class: "avatar avatar-sm", src: DEFAULT_AVATAR, alt: "User" }
                                    div { class: "comment-bubble",
                                        span { class: "comment-author", "{comment.author}" }
                                        div { class: "comment-text", "{comment.text}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
