//! Visibility of the overlays attached to a post card.
//!
//! ## Panels
//!
//! - reaction popup: who reacted with what
//! - comment panel: composer and thread
//! - reaction menu: the emoji picker floating above the reaction button
//!
//! The popup and the comment panel share one slot, so opening either closes the
//! other. The menu is independent of both.
//!
//! ## Hover intent
//!
//! The menu sits above its trigger with a gap between them. Hiding it the
//! moment the pointer leaves the trigger would make it unreachable, so leaving
//! only *schedules* a close. The host waits for the grace interval and hands the
//! returned [`CloseTicket`] back through [`PanelVisibility::expire_close`].
//! Re-entering either surface, or leaving again, invalidates older tickets.
//!
//! ```text
//!  enter ──► open ──leave──► pending(t1) ──grace──► expire(t1) ──► closed
//!              ▲                 │
//!              └─────enter───────┘        (t1 is now stale)
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay between the pointer leaving the menu and the menu hiding.
pub const DEFAULT_MENU_CLOSE_GRACE: Duration = Duration::from_millis(120);

/// Which of the two mutually exclusive panels is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusivePanel {
    #[default]
    None,
    Reacts,
    Comments,
}

/// Identifies one scheduled menu close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Overlay visibility for one card.
#[derive(Debug, Clone, Default)]
pub struct PanelVisibility {
    panel: ExclusivePanel,
    menu_open: bool,
    /// Ticket of the close that is still allowed to fire
    pending_close: Option<CloseTicket>,
    next_ticket: u64,
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> ExclusivePanel {
        self.panel
    }

    pub fn reaction_popup_open(&self) -> bool {
        self.panel == ExclusivePanel::Reacts
    }

    pub fn comment_panel_open(&self) -> bool {
        self.panel == ExclusivePanel::Comments
    }

    pub fn reaction_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether a deferred close is waiting to fire.
    pub fn close_pending(&self) -> bool {
        self.pending_close.is_some()
    }

    /// Toggle the reaction popup, hiding the comment panel.
    pub fn show_react_popup(&mut self) {
        self.toggle_panel(ExclusivePanel::Reacts);
    }

    /// Toggle the comment panel, hiding the reaction popup.
    pub fn show_comments(&mut self) {
        self.toggle_panel(ExclusivePanel::Comments);
    }

    fn toggle_panel(&mut self, target: ExclusivePanel) {
        self.panel = if self.panel == target {
            ExclusivePanel::None
        } else {
            target
        };
        tracing::trace!(panel = ?self.panel, "Panel toggled");
    }

    /// Show the menu and cancel any pending close.
    pub fn open_reaction_menu(&mut self) {
        self.pending_close = None;
        self.menu_open = true;
    }

    /// Start (or restart) the deferred close.
    ///
    /// Only the returned ticket can close the menu; earlier ones become stale.
    pub fn schedule_close_reaction_menu(&mut self) -> CloseTicket {
        self.next_ticket += 1;
        let ticket = CloseTicket(self.next_ticket);
        self.pending_close = Some(ticket);
        ticket
    }

    /// Called by the host once the grace interval for `ticket` has elapsed.
    ///
    /// Returns true if the menu was closed by this call.
    pub fn expire_close(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close != Some(ticket) {
            tracing::trace!(ticket = ?ticket, "Stale menu close ignored");
            return false;
        }
        self.pending_close = None;
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Hide the menu now, dropping any pending close.
    pub fn close_reaction_menu(&mut self) {
        self.pending_close = None;
        self.menu_open = false;
    }
}
