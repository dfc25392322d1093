//! Seams between the lifecycle state machine and the UI toolkit.
//!
//! The AppKit implementations live in `platform::macos::ui`; tests use
//! recording fakes. Every method is called on the UI thread, and none of them
//! may call back into the caller synchronously except where noted.

use crate::model::Rect;

/// The one transient popup (a popover) as the toolkit exposes it.
pub trait PopupHost {
    /// A live backdrop view inserted into the popup's frame.
    type Backdrop;

    /// Show the popup anchored to the tray affordance. The host creates the
    /// underlying popup lazily on first use.
    fn show_anchored(&self);

    /// Give keyboard focus to the popup's content.
    fn focus_content(&self);

    /// Ask the popup to run its native close. The host reports the actual
    /// closure through the listener registered with `on_did_close`, exactly
    /// once per call, possibly synchronously from inside this call.
    fn request_close(&self);

    /// Build a fresh backdrop and insert it behind everything else in the
    /// popup's frame, resizing with it.
    ///
    /// Returns `None` when the popup has no frame to insert into yet.
    fn insert_backdrop(&self) -> Option<Self::Backdrop>;

    /// Detach and discard a backdrop previously returned by `insert_backdrop`.
    fn remove_backdrop(&self, backdrop: Self::Backdrop);

    /// Register the listener for the popup's closure notification.
    ///
    /// Invoked once per closure, whatever caused it (our own
    /// `request_close`, a click elsewhere, Escape). Registering again
    /// replaces the previous listener.
    fn on_did_close(&self, listener: Box<dyn Fn()>);
}

/// The settings window as the toolkit exposes it.
pub trait SettingsHost {
    type Window;

    /// The settings window, if one exists and is visible.
    fn visible_window(&self) -> Option<Self::Window>;

    /// Activate the app and order `window` to the front.
    ///
    /// Returns false if the window was closed in the meantime.
    fn bring_to_front(&self, window: &Self::Window) -> bool;

    /// Create the settings window at `frame` and keep it alive.
    fn create_window(&self, frame: Rect) -> Self::Window;

    /// Frame of the primary display.
    fn primary_display(&self) -> Rect;
}
