//! The feed page model: a viewer and their independent post cards.

use crate::card::PostCard;
use crate::config::{CardConfig, FeedConfig};
use crate::types::ViewerId;

/// Post cards in display order.
///
/// Cards share nothing; reacting on one never touches another.
#[derive(Debug, Clone)]
pub struct Feed {
    viewer: ViewerId,
    card_config: CardConfig,
    cards: Vec<PostCard>,
}

impl Feed {
    /// Mount one card per configured post.
    pub fn from_config(config: &FeedConfig) -> Self {
        let viewer = config.viewer_id();
        let cards = config
            .posts
            .iter()
            .map(|post| PostCard::new(post.to_details(), viewer.clone()))
            .collect();
        Self {
            viewer,
            card_config: config.card_config(),
            cards,
        }
    }

    pub fn viewer(&self) -> &ViewerId {
        &self.viewer
    }

    pub fn card_config(&self) -> CardConfig {
        self.card_config
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [PostCard] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hand the cards over to whoever hosts them.
    pub fn into_cards(self) -> Vec<PostCard> {
        self.cards
    }
}
