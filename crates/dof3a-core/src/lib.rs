//! Dof3a Feed Core Library
//!
//! Interaction state for the post cards of a social feed.
//!
//! ## Overview
//!
//! Each post card tracks, for one viewer:
//!
//! - **Reactions**: one of like/love/laugh per viewer, with undo by picking the
//!   same reaction again, and a roster of who reacted with what
//! - **Comments**: an append-only thread
//! - **Panels**: the reaction popup and comment panel (never both open) and a
//!   hover-driven reaction picker that closes after a short grace interval
//!
//! Nothing is persisted. A card's state lives as long as the card.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dof3a_core::{CardEvent, PostCard, PostDetails, ReactionKind, ViewerId};
//!
//! let mut card = PostCard::new(PostDetails::new("Omar Ashraf", "hello!"), ViewerId::new("Ahmed"));
//!
//! card.handle(CardEvent::ReactionSelected { kind: Some(ReactionKind::Like) });
//! card.handle(CardEvent::CommentDraftChanged { text: "nice post".into() });
//! card.handle(CardEvent::CommentSubmitted);
//!
//! let view = card.view(chrono::Utc::now());
//! assert_eq!(view.total_reactions, 1);
//! assert_eq!(view.comment_count(), 1);
//! ```

pub mod card;
pub mod comments;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod panels;
pub mod reaction;
pub mod session;
pub mod time;
pub mod types;

// Re-exports
pub use card::{CardEvent, CardView, PostCard};
pub use comments::{Comment, CommentLog};
pub use config::{CardConfig, FeedConfig, PostConfig, DEFAULT_VIEWER};
pub use error::{FeedError, FeedResult};
pub use feed::Feed;
pub use panels::{CloseTicket, ExclusivePanel, PanelVisibility, DEFAULT_MENU_CLOSE_GRACE};
pub use reaction::{ReactionChange, ReactionKind, ReactionState, RosterEntry};
pub use session::CardSession;
pub use time::format_relative_time;
pub use types::{PostDetails, PostId, ViewerId, DEFAULT_AVATAR};
