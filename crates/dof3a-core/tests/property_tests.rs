//! Property-based tests for post card state
//!
//! Uses proptest to check the reaction, comment and panel invariants over
//! arbitrary event sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use dof3a_core::{
    CardEvent, CommentLog, PanelVisibility, PostCard, PostDetails, ReactionKind, ReactionState,
    ViewerId,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = ReactionKind> {
    prop_oneof![
        Just(ReactionKind::Like),
        Just(ReactionKind::Love),
        Just(ReactionKind::Laugh),
    ]
}

/// A small pool of names so viewers collide often
fn viewer_strategy() -> impl Strategy<Value = ViewerId> {
    prop::sample::select(vec!["Ahmed", "Omar", "Aly", "sayed", "Fady"]).prop_map(|name| ViewerId::new(name))
}

/// Toggles by arbitrary viewers, including the no-reaction value
fn toggles_strategy(max_ops: usize) -> impl Strategy<Value = Vec<(Option<ReactionKind>, ViewerId)>> {
    prop::collection::vec((prop::option::weighted(0.9, kind_strategy()), viewer_strategy()), 0..max_ops)
}

fn comment_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 ]{1,40}").expect("valid regex"),
        prop::string::string_regex("[ \t\n]{0,5}").expect("valid regex"),
    ]
}

fn card_event_strategy() -> impl Strategy<Value = CardEvent> {
    prop_oneof![
        Just(CardEvent::ReactionButtonPressed),
        prop::option::of(kind_strategy()).prop_map(|kind| CardEvent::ReactionSelected { kind }),
        Just(CardEvent::MenuPointerEntered),
        Just(CardEvent::MenuPointerLeft),
        Just(CardEvent::ReactsTogglePressed),
        Just(CardEvent::CommentsTogglePressed),
        comment_text_strategy().prop_map(|text| CardEvent::CommentDraftChanged { text }),
        Just(CardEvent::CommentSubmitted),
    ]
}

fn holders(state: &ReactionState) -> Vec<ViewerId> {
    ReactionKind::ALL
        .iter()
        .flat_map(|kind| state.roster(*kind).iter().cloned())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No identity is ever in two rosters
    #[test]
    fn viewer_in_at_most_one_roster(ops in toggles_strategy(60)) {
        let mut state = ReactionState::new(ViewerId::new("Ahmed"));

        for (kind, viewer) in ops {
            state.toggle(kind, &viewer);
            let all = holders(&state);
            let distinct: HashSet<_> = all.iter().collect();
            prop_assert_eq!(all.len(), distinct.len());
        }
    }

    /// The cached reaction always matches the roster holding the viewer
    #[test]
    fn cache_matches_rosters(ops in toggles_strategy(60)) {
        let me = ViewerId::new("Ahmed");
        let mut state = ReactionState::new(me.clone());

        for (kind, viewer) in ops {
            state.toggle(kind, &viewer);
            let holding: Vec<_> = ReactionKind::ALL
                .into_iter()
                .filter(|k| state.roster(*k).contains(&me))
                .collect();
            prop_assert_eq!(state.current_viewer_reaction(), holding.first().copied());
        }
    }

    /// Toggling the same kind twice restores the previous reaction state
    #[test]
    fn toggle_twice_is_undo(ops in toggles_strategy(20), kind in kind_strategy()) {
        let me = ViewerId::new("Ahmed");
        let mut state = ReactionState::new(me.clone());
        for (k, viewer) in ops {
            state.toggle(k, &viewer);
        }
        // Start from "no reaction" for the viewer
        if let Some(held) = state.current_viewer_reaction() {
            state.toggle(Some(held), &me);
        }
        let before = state.total_count();

        state.toggle(Some(kind), &me);
        state.toggle(Some(kind), &me);

        prop_assert_eq!(state.current_viewer_reaction(), None);
        prop_assert_eq!(state.total_count(), before);
    }

    /// total_count is the number of distinct viewers holding any reaction
    #[test]
    fn count_matches_distinct_holders(ops in toggles_strategy(60)) {
        let mut state = ReactionState::new(ViewerId::new("Ahmed"));

        for (kind, viewer) in ops {
            state.toggle(kind, &viewer);
        }

        let sum: usize = state.roster_snapshot().iter().map(|e| e.count()).sum();
        let distinct: HashSet<_> = holders(&state).into_iter().collect();
        prop_assert_eq!(state.total_count(), sum);
        prop_assert_eq!(state.total_count(), distinct.len());
    }

    /// Existing comments never change; blank text never adds one
    #[test]
    fn comment_log_is_append_only(texts in prop::collection::vec(comment_text_strategy(), 0..30)) {
        let mut log = CommentLog::new();
        let author = ViewerId::new("Ahmed");

        for text in texts {
            let before = log.entries().to_vec();
            let added = log.submit(&text, &author).is_some();

            prop_assert_eq!(added, !text.trim().is_empty());
            prop_assert_eq!(log.count(), before.len() + usize::from(added));
            prop_assert_eq!(&log.entries()[..before.len()], &before[..]);
        }
    }

    /// Popup and comment panel are never open together
    #[test]
    fn panels_mutually_exclusive(ops in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut panels = PanelVisibility::new();

        for popup in ops {
            if popup {
                panels.show_react_popup();
            } else {
                panels.show_comments();
            }
            prop_assert!(!(panels.reaction_popup_open() && panels.comment_panel_open()));
        }
    }

    /// Card-level invariants hold over any event sequence
    #[test]
    fn card_invariants(events in prop::collection::vec(card_event_strategy(), 0..80)) {
        let me = ViewerId::new("Ahmed");
        let mut card = PostCard::new(PostDetails::new("Omar", "hello"), me.clone());
        let mut comments = 0;

        for event in events {
            card.handle(event);
            let view = card.view(chrono::Utc::now());

            prop_assert!(!(view.reaction_popup_open && view.comment_panel_open));
            prop_assert!(view.total_reactions <= 1);
            prop_assert_eq!(view.total_reactions, usize::from(view.viewer_reaction.is_some()));
            prop_assert!(view.comments.len() >= comments);
            comments = view.comments.len();
        }
    }
}
