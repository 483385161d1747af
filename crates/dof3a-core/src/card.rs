//! The post card: one post plus its reactions, comments and overlays.
//!
//! A [`PostCard`] owns three independent pieces of state:
//!
//! - [`ReactionState`] - who reacted with what
//! - [`CommentLog`] - the comment thread
//! - [`PanelVisibility`] - which overlays are showing
//!
//! Hosts feed it [`CardEvent`]s and render [`CardView`]s. Each event is applied
//! in full before `handle` returns. The only work left to the host is waiting
//! out the menu close grace interval when `handle` hands back a [`CloseTicket`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::comments::{Comment, CommentLog};
use crate::panels::{CloseTicket, ExclusivePanel, PanelVisibility};
use crate::reaction::{ReactionChange, ReactionKind, ReactionState, RosterEntry};
use crate::time::format_relative_time;
use crate::types::{PostDetails, PostId, ViewerId};

/// Viewer input a card reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CardEvent {
    /// Main reaction button clicked
    ReactionButtonPressed,
    /// An emoji in the picker clicked; `None` does nothing
    ReactionSelected {
        #[serde(default)]
        kind: Option<ReactionKind>,
    },
    /// Pointer entered the reaction button or the picker
    MenuPointerEntered,
    /// Pointer left the reaction button or the picker
    MenuPointerLeft,
    /// "N Reacts" clicked
    ReactsTogglePressed,
    /// "N Comments" or the comment button clicked
    CommentsTogglePressed,
    /// Composer text edited
    CommentDraftChanged { text: String },
    /// Composer form submitted
    CommentSubmitted,
}

/// Everything needed to render a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub post: PostDetails,
    pub viewer: ViewerId,
    /// Relative age of the post at render time
    pub posted_label: String,
    pub total_reactions: usize,
    pub rosters: Vec<RosterEntry>,
    pub viewer_reaction: Option<ReactionKind>,
    pub comments: Vec<Comment>,
    pub comment_draft: String,
    pub reaction_popup_open: bool,
    pub comment_panel_open: bool,
    pub reaction_menu_open: bool,
}

impl CardView {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Interactive state for a single post.
#[derive(Debug, Clone)]
pub struct PostCard {
    details: PostDetails,
    reactions: ReactionState,
    comments: CommentLog,
    panels: PanelVisibility,
    draft: String,
}

impl PostCard {
    /// Mount a card for `details` as seen by `viewer`.
    pub fn new(details: PostDetails, viewer: ViewerId) -> Self {
        Self {
            details,
            reactions: ReactionState::new(viewer),
            comments: CommentLog::new(),
            panels: PanelVisibility::new(),
            draft: String::new(),
        }
    }

    pub fn id(&self) -> PostId {
        self.details.id
    }

    pub fn details(&self) -> &PostDetails {
        &self.details
    }

    pub fn viewer(&self) -> &ViewerId {
        self.reactions.viewer()
    }

    pub fn reactions(&self) -> &ReactionState {
        &self.reactions
    }

    pub fn comments(&self) -> &CommentLog {
        &self.comments
    }

    pub fn panels(&self) -> &PanelVisibility {
        &self.panels
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Apply one event.
    ///
    /// Returns a ticket when the event scheduled a deferred menu close; pass it
    /// to [`PostCard::expire_menu_close`] once the grace interval has elapsed.
    pub fn handle(&mut self, event: CardEvent) -> Option<CloseTicket> {
        tracing::trace!(post = %self.details.id, event = ?event, "Card event");
        match event {
            CardEvent::ReactionButtonPressed => self.press_reaction_button(),
            CardEvent::ReactionSelected { kind } => {
                self.select_reaction(kind);
            }
            CardEvent::MenuPointerEntered => self.panels.open_reaction_menu(),
            CardEvent::MenuPointerLeft => return Some(self.panels.schedule_close_reaction_menu()),
            CardEvent::ReactsTogglePressed => self.panels.show_react_popup(),
            CardEvent::CommentsTogglePressed => self.panels.show_comments(),
            CardEvent::CommentDraftChanged { text } => self.draft = text,
            CardEvent::CommentSubmitted => {
                self.submit_comment();
            }
        }
        None
    }

    /// Toggle `kind` for the viewer and hide the picker.
    pub fn select_reaction(&mut self, kind: Option<ReactionKind>) -> Option<ReactionChange> {
        let viewer = self.reactions.viewer().clone();
        let change = self.reactions.toggle(kind, &viewer)?;
        self.panels.close_reaction_menu();
        tracing::debug!(post = %self.details.id, change = ?change, "Viewer reaction changed");
        Some(change)
    }

    /// Reaction button: undo the held reaction, or open the picker if none.
    pub fn press_reaction_button(&mut self) {
        match self.reactions.current_viewer_reaction() {
            Some(held) => {
                self.select_reaction(Some(held));
            }
            None => self.panels.open_reaction_menu(),
        }
    }

    /// Post the draft as the viewer. The draft is cleared only on success.
    pub fn submit_comment(&mut self) -> Option<Comment> {
        let viewer = self.reactions.viewer().clone();
        let comment = self.comments.submit(&self.draft, &viewer).cloned()?;
        self.draft.clear();
        Some(comment)
    }

    /// Deliver an elapsed close timer.
    pub fn expire_menu_close(&mut self, ticket: CloseTicket) -> bool {
        self.panels.expire_close(ticket)
    }

    /// Project the current state for rendering.
    pub fn view(&self, now: DateTime<Utc>) -> CardView {
        CardView {
            post: self.details.clone(),
            viewer: self.viewer().clone(),
            posted_label: format_relative_time(self.details.posted_at, now),
            total_reactions: self.reactions.total_count(),
            rosters: self.reactions.roster_snapshot(),
            viewer_reaction: self.reactions.current_viewer_reaction(),
            comments: self.comments.entries().to_vec(),
            comment_draft: self.draft.clone(),
            reaction_popup_open: self.panels.panel() == ExclusivePanel::Reacts,
            comment_panel_open: self.panels.panel() == ExclusivePanel::Comments,
            reaction_menu_open: self.panels.reaction_menu_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> PostCard {
        PostCard::new(
            PostDetails::new("Omar Ashraf", "hello! I am omar"),
            ViewerId::new("Ahmed"),
        )
    }

    fn select(kind: ReactionKind) -> CardEvent {
        CardEvent::ReactionSelected { kind: Some(kind) }
    }

    #[test]
    fn test_reaction_sequence_from_empty() {
        let mut card = card();

        card.handle(select(ReactionKind::Like));
        assert_eq!(card.reactions().roster(ReactionKind::Like), &[ViewerId::new("Ahmed")]);
        assert_eq!(card.reactions().total_count(), 1);

        card.handle(select(ReactionKind::Love));
        assert!(card.reactions().roster(ReactionKind::Like).is_empty());
        assert_eq!(card.reactions().total_count(), 1);

        card.handle(select(ReactionKind::Love));
        assert_eq!(card.reactions().current_viewer_reaction(), None);
        assert_eq!(card.reactions().total_count(), 0);
    }

    #[test]
    fn test_selecting_closes_menu() {
        let mut card = card();
        card.handle(CardEvent::MenuPointerEntered);
        assert!(card.panels().reaction_menu_open());

        card.handle(select(ReactionKind::Laugh));

        assert!(!card.panels().reaction_menu_open());
    }

    #[test]
    fn test_ignored_selection_leaves_menu_open() {
        let mut card = card();
        card.handle(CardEvent::MenuPointerEntered);

        card.handle(CardEvent::ReactionSelected { kind: None });

        assert!(card.panels().reaction_menu_open());
        assert_eq!(card.reactions().total_count(), 0);
    }

    #[test]
    fn test_button_opens_menu_without_reaction() {
        let mut card = card();
        card.handle(CardEvent::ReactionButtonPressed);
        assert!(card.panels().reaction_menu_open());
        assert_eq!(card.reactions().total_count(), 0);
    }

    #[test]
    fn test_button_undoes_held_reaction() {
        let mut card = card();
        card.handle(select(ReactionKind::Love));

        card.handle(CardEvent::ReactionButtonPressed);

        assert_eq!(card.reactions().current_viewer_reaction(), None);
        assert_eq!(card.reactions().total_count(), 0);
        assert!(!card.panels().reaction_menu_open());
    }

    #[test]
    fn test_leave_returns_ticket() {
        let mut card = card();
        card.handle(CardEvent::MenuPointerEntered);

        let ticket = card.handle(CardEvent::MenuPointerLeft).unwrap();
        assert!(card.panels().reaction_menu_open());

        assert!(card.expire_menu_close(ticket));
        assert!(!card.panels().reaction_menu_open());
    }

    #[test]
    fn test_only_leave_schedules() {
        let mut card = card();
        assert!(card.handle(CardEvent::MenuPointerEntered).is_none());
        assert!(card.handle(CardEvent::ReactsTogglePressed).is_none());
        assert!(card.handle(CardEvent::CommentSubmitted).is_none());
    }

    #[test]
    fn test_comment_flow() {
        let mut card = card();

        card.handle(CardEvent::CommentDraftChanged { text: "  ".to_string() });
        card.handle(CardEvent::CommentSubmitted);
        assert_eq!(card.comments().count(), 0);
        assert_eq!(card.draft(), "  ");

        card.handle(CardEvent::CommentDraftChanged { text: "nice post".to_string() });
        card.handle(CardEvent::CommentSubmitted);
        assert_eq!(card.comments().count(), 1);
        assert_eq!(card.comments().entries()[0].author, ViewerId::new("Ahmed"));
        assert_eq!(card.comments().entries()[0].text, "nice post");
        assert_eq!(card.draft(), "");
    }

    #[test]
    fn test_view_projection() {
        let mut card = card();
        card.handle(CardEvent::ReactsTogglePressed);
        card.handle(select(ReactionKind::Like));
        card.handle(CardEvent::CommentsTogglePressed);

        let view = card.view(Utc::now());

        assert_eq!(view.posted_label, "Just now");
        assert_eq!(view.total_reactions, 1);
        assert_eq!(view.viewer_reaction, Some(ReactionKind::Like));
        assert_eq!(view.rosters.len(), 3);
        assert!(view.comment_panel_open);
        assert!(!view.reaction_popup_open);
        assert!(!view.reaction_menu_open);
        assert_eq!(view.comment_count(), 0);
    }

    #[test]
    fn test_event_json_shape() {
        let event: CardEvent = serde_json::from_str(r#"{"event":"reaction_selected","kind":"love"}"#).unwrap();
        assert_eq!(event, select(ReactionKind::Love));

        let event: CardEvent = serde_json::from_str(r#"{"event":"reaction_selected"}"#).unwrap();
        assert_eq!(event, CardEvent::ReactionSelected { kind: None });

        let event: CardEvent = serde_json::from_str(r#"{"event":"menu_pointer_left"}"#).unwrap();
        assert_eq!(event, CardEvent::MenuPointerLeft);
    }
}
