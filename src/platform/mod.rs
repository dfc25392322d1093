//! Platform-specific implementations.
//!
//! Only macOS has a menu bar to live in; other targets stop at startup with
//! `StartupError::UnsupportedPlatform`.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
