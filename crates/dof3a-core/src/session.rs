//! Async host for a single post card.
//!
//! [`CardSession`] owns a [`PostCard`] behind a mutex and runs the menu close
//! timer on tokio. Every event is applied in one critical section, so handlers
//! never interleave on a card, and each resulting [`CardView`] is published on a
//! watch channel for whoever renders it.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CardSession                                              │
//! │  ├── card: Mutex<PostCard>                                │
//! │  ├── close_timer: Mutex<Option<JoinHandle>>               │
//! │  │   └── single-shot sleep(grace) → expire_menu_close     │
//! │  └── view_tx: watch::Sender<CardView>                     │
//! │      └── latest projection for UI subscriptions           │
//! └───────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::card::{CardEvent, CardView, PostCard};
use crate::config::CardConfig;
use crate::panels::CloseTicket;

/// A post card wired to a timer and a view channel.
///
/// Must be driven from inside a tokio runtime: scheduling a menu close spawns a
/// task.
///
/// # Example
///
/// ```ignore
/// let session = CardSession::new(card, CardConfig::default());
/// let mut views = session.subscribe();
///
/// session.dispatch(CardEvent::MenuPointerEntered);
/// session.dispatch(CardEvent::MenuPointerLeft);
///
/// // ~120ms later the menu closes and a new view is published
/// views.changed().await?;
/// assert!(!views.borrow().reaction_menu_open);
/// ```
pub struct CardSession {
    card: Mutex<PostCard>,
    close_timer: Mutex<Option<JoinHandle<()>>>,
    grace: Duration,
    view_tx: watch::Sender<CardView>,
}

impl CardSession {
    pub fn new(card: PostCard, config: CardConfig) -> Arc<Self> {
        let (view_tx, _) = watch::channel(card.view(Utc::now()));
        Arc::new(Self {
            card: Mutex::new(card),
            close_timer: Mutex::new(None),
            grace: config.menu_close_grace,
            view_tx,
        })
    }

    /// Delay before a scheduled menu close takes effect.
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Apply an event and publish the new view.
    pub fn dispatch(self: &Arc<Self>, event: CardEvent) -> CardView {
        let (ticket, close_pending, view) = {
            let mut card = self.card.lock();
            let ticket = card.handle(event);
            (ticket, card.panels().close_pending(), card.view(Utc::now()))
        };

        if let Some(ticket) = ticket {
            self.start_close_timer(ticket);
        } else if !close_pending {
            self.cancel_close_timer();
        }

        self.view_tx.send_replace(view.clone());
        view
    }

    fn start_close_timer(self: &Arc<Self>, ticket: CloseTicket) {
        let session: Weak<Self> = Arc::downgrade(self);
        let grace = self.grace;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            let Some(session) = session.upgrade() else {
                return;
            };
            session.expire(ticket);
        });

        if let Some(previous) = self.close_timer.lock().replace(handle) {
            previous.abort();
        }
    }

    fn cancel_close_timer(&self) {
        if let Some(handle) = self.close_timer.lock().take() {
            handle.abort();
            tracing::trace!("Menu close timer cancelled");
        }
    }

    fn expire(&self, ticket: CloseTicket) {
        let view = {
            let mut card = self.card.lock();
            if !card.expire_menu_close(ticket) {
                return;
            }
            card.view(Utc::now())
        };
        tracing::debug!(post = %view.post.id, "Reaction menu closed after grace interval");
        self.view_tx.send_replace(view);
    }

    /// Receive every view published after this call.
    pub fn subscribe(&self) -> watch::Receiver<CardView> {
        self.view_tx.subscribe()
    }

    /// Fresh projection of the current state.
    pub fn view(&self) -> CardView {
        self.card.lock().view(Utc::now())
    }

    /// Read the card without publishing anything.
    pub fn with_card<R>(&self, f: impl FnOnce(&PostCard) -> R) -> R {
        f(&self.card.lock())
    }
}

impl Drop for CardSession {
    fn drop(&mut self) {
        if let Some(handle) = self.close_timer.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::ReactionKind;
    use crate::types::{PostDetails, ViewerId};

    fn session() -> Arc<CardSession> {
        let card = PostCard::new(PostDetails::new("Aly Ahmed", "hello!"), ViewerId::new("Ahmed"));
        CardSession::new(card, CardConfig::default())
    }

    #[tokio::test]
    async fn test_dispatch_publishes_view() {
        let session = session();
        let rx = session.subscribe();

        let view = session.dispatch(CardEvent::ReactionSelected {
            kind: Some(ReactionKind::Like),
        });

        assert_eq!(view.total_reactions, 1);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().viewer_reaction, Some(ReactionKind::Like));
    }

    #[tokio::test(start_paused = true)]
    async fn test_menu_closes_after_grace() {
        let session = session();
        session.dispatch(CardEvent::MenuPointerEntered);
        session.dispatch(CardEvent::MenuPointerLeft);

        tokio::time::sleep(session.grace() / 2).await;
        assert!(session.view().reaction_menu_open);

        tokio::time::sleep(session.grace()).await;
        assert!(!session.view().reaction_menu_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentry_keeps_menu_open() {
        let session = session();
        session.dispatch(CardEvent::MenuPointerEntered);
        session.dispatch(CardEvent::MenuPointerLeft);
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.dispatch(CardEvent::MenuPointerEntered);

        tokio::time::sleep(session.grace() * 4).await;

        assert!(session.view().reaction_menu_open);
        assert!(session.with_card(|card| !card.panels().close_pending()));
    }
}
