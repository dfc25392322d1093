//! Drop-target / popover lifecycle.
//!
//! Toolkit-independent state machine behind the menu bar item. The AppKit
//! side implements the traits in [`host`]; everything here runs on the UI
//! thread and is tested with fakes.
//!
//! # Module Structure
//!
//! - [`drop_surface`]: drag enter/exit/drop handling and highlight state
//! - [`tray`]: the single tray affordance and its two callbacks
//! - [`backdrop`]: tracking of the at-most-one popup backdrop
//! - [`popup`]: the Closed/Open popup state machine
//! - [`settings`]: settings window reuse-or-create
//! - [`coordinator`]: wiring, plus the process-wide `AppContext`

pub mod backdrop;
pub mod coordinator;
pub mod drop_surface;
pub mod host;
pub mod popup;
pub mod settings;
pub mod tray;

pub use backdrop::BackdropSlot;
pub use coordinator::{AppContext, DropLifecycleCoordinator};
pub use drop_surface::{DropSurface, PointerKind, PointerRouting};
pub use host::{PopupHost, SettingsHost};
pub use popup::PopupController;
pub use settings::{SettingsOutcome, SettingsPresenter};
pub use tray::TrayAffordance;
