//! Reaction Bar Component
//!
//! The reaction button with its floating picker, and the comment button.
//!
//! The picker opens when the pointer enters the button or the picker itself
//! and closes a short while after it leaves both; the card session owns that
//! timer. Clicking the button while holding a reaction undoes it.

use dioxus::prelude::*;
use dof3a_core::{CardEvent, ReactionKind};

use super::overlay_class;

/// Button styling for the viewer's current reaction.
pub(crate) fn reaction_button_class(reaction: Option<ReactionKind>) -> &'static str {
    match reaction {
        Some(ReactionKind::Like) => "action-btn like",
        Some(ReactionKind::Love) => "action-btn love",
        Some(ReactionKind::Laugh) => "action-btn laugh",
        None => "action-btn",
    }
}

/// Emoji shown on the reaction button.
pub(crate) fn reaction_button_icon(reaction: Option<ReactionKind>) -> &'static str {
    reaction.unwrap_or(ReactionKind::Love).emoji()
}

/// Reaction and comment buttons under a post.
///
/// # Props
///
/// * `viewer_reaction` - The viewer's reaction, for button styling
/// * `menu_open` - Whether the picker is showing
/// * `on_event` - Receives every interaction as a [`CardEvent`]
#[component]
pub fn ReactionBar(
    viewer_reaction: Option<ReactionKind>,
    menu_open: bool,
    on_event: EventHandler<CardEvent>,
) -> Element {
    rsx! {
        div { class: "post-actions",
            div {
                class: "reaction-trigger",
                onmouseenter: move |_| on_event.call(CardEvent::MenuPointerEntered),
                onmouseleave: move |_| on_event.call(CardEvent::MenuPointerLeft),

                // Picker floats above the button
                div {
                    class: "reaction-menu {overlay_class(menu_open)}",
                    onmouseenter: move |_| on_event.call(CardEvent::MenuPointerEntered),
                    onmouseleave: move |_| on_event.call(CardEvent::MenuPointerLeft),
                    for kind in ReactionKind::ALL {
                        button {
                            key: "{kind}",
                            class: "reaction-option",
                            r#type: "button",
                            "aria-label": kind.label(),
                            onclick: move |_| on_event.call(CardEvent::ReactionSelected { kind: Some(kind) }),
                            "{kind.emoji()}"
                        }
                    }
                }

                button {
                    class: reaction_button_class(viewer_reaction),
                    r#type: "button",
                    onclick: move |_| on_event.call(CardEvent::ReactionButtonPressed),
                    "{reaction_button_icon(viewer_reaction)}"
                }
            }

            div { style: "flex: 1;",
                button {
                    class: "action-btn comment",
                    r#type: "button",
                    onclick: move |_| on_event.call(CardEvent::CommentsTogglePressed),
                    "\u{1F4AC}"
                }
            }
        }
    }
}
