//! AppKit views and hosts.
//!
//! - [`status_bar`]: the menu bar item and its click target
//! - [`drop_view`]: drag destination layered over the status button
//! - [`popover`]: `PopupHost` over NSPopover
//! - [`backdrop_view`]: opaque backdrop inserted behind the popover content
//! - [`content`]: the popover's view controller
//! - [`settings`]: `SettingsHost` over a single NSWindow

pub mod backdrop_view;
pub mod content;
pub mod drop_view;
pub mod popover;
pub mod settings;
pub mod status_bar;

pub use content::PopupContent;
pub use popover::AppKitPopoverHost;
pub use settings::{AppKitSettingsHost, SettingsInfo};
pub use status_bar::{install_status_bar, StatusBarItem};
