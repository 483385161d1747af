//! Feed and card configuration.
//!
//! Everything has a default, so the desktop app and CLI run with no config file
//! at all. A JSON file can override any field:
//!
//! ```json
//! {
//!   "viewer": "Ahmed Ashraf",
//!   "menu_close_grace_ms": 150,
//!   "posts": [
//!     { "poster_name": "Omar Ashraf", "content": "hello!", "post_image": "/cat.png" }
//!   ]
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};
use crate::panels::DEFAULT_MENU_CLOSE_GRACE;
use crate::types::{PostDetails, ViewerId, DEFAULT_AVATAR};

/// Viewer name used when none is configured.
pub const DEFAULT_VIEWER: &str = "Ahmed Ashraf";

/// Per-card settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardConfig {
    /// How long the reaction menu stays up after the pointer leaves it.
    pub menu_close_grace: Duration,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            menu_close_grace: DEFAULT_MENU_CLOSE_GRACE,
        }
    }
}

/// One post as written in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostConfig {
    pub poster_name: String,
    #[serde(default = "default_avatar")]
    pub poster_avatar: String,
    pub content: String,
    #[serde(default)]
    pub post_image: Option<String>,
    /// Defaults to load time when omitted
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl PostConfig {
    fn demo(poster_name: &str, content: &str) -> Self {
        Self {
            poster_name: poster_name.to_string(),
            poster_avatar: default_avatar(),
            content: content.to_string(),
            post_image: None,
            posted_at: None,
        }
    }

    /// Build the card parameters for this post.
    pub fn to_details(&self) -> PostDetails {
        let mut details = PostDetails::new(&self.poster_name, &self.content)
            .with_avatar(&self.poster_avatar);
        if let Some(ref image) = self.post_image {
            details = details.with_image(image);
        }
        if let Some(posted_at) = self.posted_at {
            details = details.with_posted_at(posted_at);
        }
        details
    }
}

/// The whole feed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_viewer")]
    pub viewer: String,
    #[serde(default = "default_grace_ms")]
    pub menu_close_grace_ms: u64,
    #[serde(default = "demo_posts")]
    pub posts: Vec<PostConfig>,
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn default_viewer() -> String {
    DEFAULT_VIEWER.to_string()
}

fn default_grace_ms() -> u64 {
    DEFAULT_MENU_CLOSE_GRACE.as_millis() as u64
}

/// The sample feed shown when no posts are configured.
pub fn demo_posts() -> Vec<PostConfig> {
    vec![
        PostConfig::demo("Omar Ashraf", "hello! I am omar , I am at grade 7"),
        PostConfig::demo("Aly Ahmed", "hello! I am Aly , I am at grade 9"),
        PostConfig::demo("sayed youssef", "hello! I am sayed"),
        PostConfig::demo("Ashraf ahmed", "hello! I am Ashraf , I am at grade 11"),
        PostConfig::demo("Fady Nassar", "hello! I am Fady "),
        PostConfig::demo("ellewa", "hello! I am omar , I am at grade 7"),
        PostConfig::demo("Omar Ashraf", "hello! I am omar , I am at grade 7"),
    ]
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            viewer: default_viewer(),
            menu_close_grace_ms: default_grace_ms(),
            posts: demo_posts(),
        }
    }
}

impl FeedConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> FeedResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> FeedResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), posts = config.posts.len(), "Loaded feed config");
        Ok(config)
    }

    /// Reject names and posts that would render as blanks.
    pub fn validate(&self) -> FeedResult<()> {
        if self.viewer.trim().is_empty() {
            return Err(FeedError::Config("viewer name is empty".to_string()));
        }
        for (i, post) in self.posts.iter().enumerate() {
            if post.poster_name.trim().is_empty() {
                return Err(FeedError::Config(format!("post {} has no poster name", i)));
            }
            if post.content.trim().is_empty() {
                return Err(FeedError::Config(format!("post {} has no content", i)));
            }
        }
        Ok(())
    }

    pub fn viewer_id(&self) -> ViewerId {
        ViewerId::new(self.viewer.trim())
    }

    pub fn card_config(&self) -> CardConfig {
        CardConfig {
            menu_close_grace: Duration::from_millis(self.menu_close_grace_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo_feed() {
        let config = FeedConfig::default();
        assert_eq!(config.viewer, "Ahmed Ashraf");
        assert_eq!(config.posts.len(), 7);
        assert_eq!(config.card_config(), CardConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = FeedConfig::from_json("{}").unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = FeedConfig::from_json(
            r#"{"viewer":"Omar","menu_close_grace_ms":300,"posts":[{"poster_name":"Aly","content":"hi","post_image":"/a.png"}]}"#,
        )
        .unwrap();

        assert_eq!(config.viewer_id(), ViewerId::new("Omar"));
        assert_eq!(config.card_config().menu_close_grace, Duration::from_millis(300));
        assert_eq!(config.posts[0].poster_avatar, DEFAULT_AVATAR);

        let details = config.posts[0].to_details();
        assert_eq!(details.post_image.as_deref(), Some("/a.png"));
        assert_eq!(details.poster_name, "Aly");
    }

    #[test]
    fn test_posted_at_is_parsed() {
        let config = FeedConfig::from_json(
            r#"{"posts":[{"poster_name":"Aly","content":"hi","posted_at":"2025-01-02T03:04:05Z"}]}"#,
        )
        .unwrap();
        let details = config.posts[0].to_details();
        assert_eq!(details.posted_at.to_rfc3339(), "2025-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_blank_viewer_rejected() {
        let err = FeedConfig::from_json(r#"{"viewer":"   "}"#).unwrap_err();
        assert!(matches!(err, FeedError::Config(_)));
    }

    #[test]
    fn test_blank_post_rejected() {
        let err = FeedConfig::from_json(r#"{"posts":[{"poster_name":"Aly","content":" "}]}"#).unwrap_err();
        assert!(matches!(err, FeedError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(FeedConfig::from_json("{"), Err(FeedError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        std::fs::write(&path, r#"{"viewer":"Fady"}"#).unwrap();

        let config = FeedConfig::load(&path).unwrap();
        assert_eq!(config.viewer, "Fady");

        let missing = FeedConfig::load(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(FeedError::Io(_))));
    }
}
