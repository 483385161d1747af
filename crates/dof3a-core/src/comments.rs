//! Append-only comment thread for a post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ViewerId;

/// A comment as shown under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Position in the thread; never changes once assigned
    pub index: usize,
    pub author: ViewerId,
    /// Text as typed; guaranteed non-blank
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// Ordered comments for one post.
///
/// Entries can only be appended. There is no edit or delete, so an entry's
/// index is also its display position for the life of the card.
#[derive(Debug, Clone, Default)]
pub struct CommentLog {
    entries: Vec<Comment>,
}

impl CommentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment by `author`.
    ///
    /// Blank or whitespace-only text is dropped without touching the log.
    pub fn submit(&mut self, text: &str, author: &ViewerId) -> Option<&Comment> {
        if text.trim().is_empty() {
            tracing::trace!(author = %author, "Ignoring blank comment");
            return None;
        }

        let comment = Comment {
            index: self.entries.len(),
            author: author.clone(),
            text: text.to_string(),
            posted_at: Utc::now(),
        };
        tracing::debug!(author = %author, index = comment.index, "Comment appended");
        self.entries.push(comment);
        self.entries.last()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All comments, oldest first.
    pub fn entries(&self) -> &[Comment] {
        &self.entries
    }
}
