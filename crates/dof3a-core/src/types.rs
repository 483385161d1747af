//! Core types for the Dof3a feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Avatar used when a post or comment author has no picture of their own.
pub const DEFAULT_AVATAR: &str = "/user-profile.png";

/// Display identity of whoever is looking at the feed.
///
/// Opaque to the card: two viewers are the same person iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerId(String);

impl ViewerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character, uppercased, for avatar placeholders.
    pub fn initial(&self) -> String {
        self.0
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

impl From<&str> for ViewerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a post
///
/// Uses ULID so ids sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Ulid);

impl PostId {
    /// Create a new PostId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Convert to string representation
    pub fn to_string_repr(&self) -> String {
        self.0.to_string()
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// Everything the hosting page supplies when a card mounts.
///
/// Fixed for the lifetime of the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetails {
    pub id: PostId,
    /// Display name of the author
    pub poster_name: String,
    /// Avatar image reference (path or URL)
    pub poster_avatar: String,
    /// Body text
    pub content: String,
    /// Optional attached image reference
    pub post_image: Option<String>,
    /// When the post was made
    pub posted_at: DateTime<Utc>,
}

impl PostDetails {
    /// Create a post made right now with the default avatar and no image.
    pub fn new(poster_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            poster_name: poster_name.into(),
            poster_avatar: DEFAULT_AVATAR.to_string(),
            content: content.into(),
            post_image: None,
            posted_at: Utc::now(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.poster_avatar = avatar.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.post_image = Some(image.into());
        self
    }

    pub fn with_posted_at(mut self, posted_at: DateTime<Utc>) -> Self {
        self.posted_at = posted_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_initial() {
        assert_eq!(ViewerId::new("ahmed").initial(), "A");
        assert_eq!(ViewerId::new("").initial(), "?");
    }

    #[test]
    fn test_viewer_serializes_as_plain_string() {
        let json = serde_json::to_string(&ViewerId::new("Ahmed")).unwrap();
        assert_eq!(json, "\"Ahmed\"");
    }

    #[test]
    fn test_post_ids_are_unique() {
        assert_ne!(PostId::new(), PostId::new());
        assert!(PostId::new().to_string().starts_with("post_"));
    }

    #[test]
    fn test_post_details_builder() {
        let post = PostDetails::new("Omar", "hello")
            .with_avatar("/omar.png")
            .with_image("/cat.png");
        assert_eq!(post.poster_avatar, "/omar.png");
        assert_eq!(post.post_image.as_deref(), Some("/cat.png"));
        assert_eq!(PostDetails::new("a", "b").poster_avatar, DEFAULT_AVATAR);
    }
}
