//! Popup controller: the two-state machine around the one popover.
//!
//! ```text
//!            open() / toggle()
//!   Closed ─────────────────────► Open
//!     ▲                             │
//!     │ close() / toggle()          │
//!     │ on_external_close()         │
//!     └─────────────────────────────┘
//! ```
//!
//! Backdrop rules:
//! - `open()` drops any stale backdrop before inserting a fresh one.
//! - `close()` never touches the backdrop.
//! - `on_external_close()` is the only place a backdrop is removed after a
//!   closure, whatever closed the popup.
//!
//! Every `close()` leaves one closure notification outstanding. When the
//! popup has been reopened by the time that notification arrives, it belongs
//! to the earlier session and is ignored.

use std::cell::Cell;
use std::rc::Rc;

use super::backdrop::BackdropSlot;
use super::host::PopupHost;
use crate::model::PopupVisibility;

pub struct PopupController<H: PopupHost> {
    host: H,
    state: Cell<PopupVisibility>,
    backdrop: BackdropSlot<H::Backdrop>,
    pending_closes: Cell<u32>,
}

impl<H: PopupHost> PopupController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: Cell::new(PopupVisibility::Closed),
            backdrop: BackdropSlot::new(),
            pending_closes: Cell::new(0),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> PopupVisibility {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn has_backdrop(&self) -> bool {
        self.backdrop.is_attached()
    }

    pub fn toggle(&self) {
        match self.state.get() {
            PopupVisibility::Closed => self.open(),
            PopupVisibility::Open => self.close(),
        }
    }

    /// Show the popup. No-op when already open.
    pub fn open(&self) {
        if self.is_open() {
            log::debug!("Popup already open, ignoring open request");
            return;
        }

        self.host.show_anchored();
        self.state.set(PopupVisibility::Open);
        self.host.focus_content();

        if let Some(stale) = self.backdrop.release() {
            log::debug!("Discarding stale popup backdrop");
            self.host.remove_backdrop(stale);
        }
        match self.host.insert_backdrop() {
            Some(fresh) => {
                // Slot was just emptied, nothing to hand back.
                let _ = self.backdrop.attach(fresh);
            }
            None => log::warn!("Popup has no frame view, showing without backdrop"),
        }
    }

    /// Ask the popup to close natively. Backdrop cleanup waits for the
    /// closure notification.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        self.state.set(PopupVisibility::Closed);
        self.pending_closes.set(self.pending_closes.get() + 1);
        self.host.request_close();
    }

    /// Closure notifications requested by `close()` that have not arrived.
    pub fn pending_closes(&self) -> u32 {
        self.pending_closes.get()
    }

    /// Closure notification from the popup, for any cause.
    pub fn on_external_close(&self) {
        let pending = self.pending_closes.get();
        if pending > 0 {
            self.pending_closes.set(pending - 1);
            if self.is_open() {
                log::debug!("Ignoring closure notification from a superseded popup session");
                return;
            }
        }

        self.state.set(PopupVisibility::Closed);
        if let Some(backdrop) = self.backdrop.release() {
            self.host.remove_backdrop(backdrop);
        }
    }
}

impl<H: PopupHost + 'static> PopupController<H> {
    /// Route the host's closure notification into `on_external_close`.
    pub fn listen_for_close(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.host.on_did_close(Box::new(move || {
            if let Some(popup) = weak.upgrade() {
                popup.on_external_close();
            }
        }));
    }
}
