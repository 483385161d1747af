//! Per-post reaction rosters.
//!
//! A post keeps one ordered roster of viewers per [`ReactionKind`]. A viewer is
//! in at most one roster at a time, so picking a new kind moves them and picking
//! their current kind again removes them.
//!
//! The current viewer's reaction is cached next to the rosters so rendering the
//! reaction button never scans. Every roster mutation goes through
//! [`ReactionState::toggle`], which updates the cache in the same step.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::types::ViewerId;

/// The reactions a viewer can leave on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Laugh,
}

impl ReactionKind {
    /// Display order for pickers and popups.
    pub const ALL: [ReactionKind; 3] = [ReactionKind::Like, ReactionKind::Love, ReactionKind::Laugh];

    fn index(self) -> usize {
        match self {
            ReactionKind::Like => 0,
            ReactionKind::Love => 1,
            ReactionKind::Laugh => 2,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ReactionKind::Like => "\u{1F44D}",
            ReactionKind::Love => "\u{2764}\u{FE0F}",
            ReactionKind::Laugh => "\u{1F602}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReactionKind::Like => "Like",
            ReactionKind::Love => "Love",
            ReactionKind::Laugh => "Laugh",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Love => "love",
            ReactionKind::Laugh => "laugh",
        }
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(ReactionKind::Like),
            "love" => Ok(ReactionKind::Love),
            "laugh" => Ok(ReactionKind::Laugh),
            _ => Err(FeedError::UnknownReaction(s.to_string())),
        }
    }
}

/// What a successful toggle did to a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// Viewer had no reaction and now holds this one
    Added(ReactionKind),
    /// Viewer moved from one kind to another
    Switched { from: ReactionKind, to: ReactionKind },
    /// Viewer picked their current kind again and now holds none
    Removed(ReactionKind),
}

/// One popup row: a kind and who currently holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: ReactionKind,
    pub holders: Vec<ViewerId>,
}

impl RosterEntry {
    pub fn count(&self) -> usize {
        self.holders.len()
    }

    /// Comma-separated holder names, empty when nobody reacted.
    pub fn names(&self) -> String {
        self.holders
            .iter()
            .map(ViewerId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Reaction rosters for a single post, seen from one viewer.
#[derive(Debug, Clone)]
pub struct ReactionState {
    viewer: ViewerId,
    rosters: [Vec<ViewerId>; 3],
    viewer_reaction: Option<ReactionKind>,
}

impl ReactionState {
    /// Empty rosters, as the card is when it mounts.
    pub fn new(viewer: ViewerId) -> Self {
        Self {
            viewer,
            rosters: Default::default(),
            viewer_reaction: None,
        }
    }

    /// The viewer this state caches a reaction for.
    pub fn viewer(&self) -> &ViewerId {
        &self.viewer
    }

    /// The current viewer's reaction, if any.
    pub fn current_viewer_reaction(&self) -> Option<ReactionKind> {
        self.viewer_reaction
    }

    /// Which kind `viewer` holds.
    pub fn reaction_of(&self, viewer: &ViewerId) -> Option<ReactionKind> {
        if viewer == &self.viewer {
            return self.viewer_reaction;
        }
        ReactionKind::ALL
            .into_iter()
            .find(|kind| self.rosters[kind.index()].contains(viewer))
    }

    /// Toggle `kind` for `viewer`.
    ///
    /// Picking the held kind removes it; picking another kind moves the viewer.
    /// `None` is accepted and ignored.
    pub fn toggle(&mut self, kind: Option<ReactionKind>, viewer: &ViewerId) -> Option<ReactionChange> {
        let kind = kind?;
        let previous = self.reaction_of(viewer);

        let change = match previous {
            Some(held) if held == kind => {
                self.remove(held, viewer);
                ReactionChange::Removed(kind)
            }
            Some(held) => {
                self.remove(held, viewer);
                self.rosters[kind.index()].push(viewer.clone());
                ReactionChange::Switched { from: held, to: kind }
            }
            None => {
                self.rosters[kind.index()].push(viewer.clone());
                ReactionChange::Added(kind)
            }
        };

        if viewer == &self.viewer {
            self.viewer_reaction = match change {
                ReactionChange::Removed(_) => None,
                ReactionChange::Added(k) | ReactionChange::Switched { to: k, .. } => Some(k),
            };
        }

        tracing::debug!(viewer = %viewer, change = ?change, "Reaction toggled");
        Some(change)
    }

    fn remove(&mut self, kind: ReactionKind, viewer: &ViewerId) {
        self.rosters[kind.index()].retain(|holder| holder != viewer);
    }

    /// Holders of one kind, in the order they reacted.
    pub fn roster(&self, kind: ReactionKind) -> &[ViewerId] {
        &self.rosters[kind.index()]
    }

    /// Total reactions across all kinds.
    pub fn total_count(&self) -> usize {
        self.rosters.iter().map(Vec::len).sum()
    }

    /// Every kind with its holders, in [`ReactionKind::ALL`] order.
    pub fn roster_snapshot(&self) -> Vec<RosterEntry> {
        ReactionKind::ALL
            .into_iter()
            .map(|kind| RosterEntry {
                kind,
                holders: self.roster(kind).to_vec(),
            })
            .collect()
    }
}
