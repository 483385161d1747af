//! Post card components
//!
//! - [`PostCardView`] - one post with its reactions and comments
//! - [`ReactsPopup`] - who reacted with what
//! - [`ReactionBar`] - reaction button with hover picker, and comment toggle
//! - [`CommentPanel`] - composer and thread

mod comment_panel;
mod post_card;
mod reaction_bar;
mod reacts_popup;

pub use comment_panel::CommentPanel;
pub use post_card::PostCardView;
pub use reaction_bar::ReactionBar;
pub use reacts_popup::ReactsPopup;

/// Class suffix for overlays that fade rather than unmount.
pub(crate) fn overlay_class(open: bool) -> &'static str {
    if open {
        "overlay open"
    } else {
        "overlay closed"
    }
}
