//! macOS implementation using AppKit via objc2.
//!
//! - [`ffi`]: `msg_send!` aliases and conversions
//! - [`ui`]: status item, drop view, popover, settings window
//! - [`app`]: bootstrap and main loop

pub mod app;
pub mod ffi;
pub mod ui;

pub use app::run;
pub use ffi::bridge;
