#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Menu bar drop target. Everything outside `platform` is free of macOS FFI
//! so tests can run as normal integration tests on any host.

pub mod error;
pub mod events;
pub mod intake;
pub mod lifecycle;
pub mod model;
pub mod storage;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use error::{ConfigError, StartupError, StorageError};
pub use events::{EventBus, EventPublisher, FileDropEvent};
pub use intake::subscribe_upload_intake;
pub use lifecycle::{AppContext, DropLifecycleCoordinator, PopupController};
pub use model::{DragPayload, PopupVisibility};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Build the `env_logger` filter: `RUST_LOG` wins over the configured level.
pub fn log_filter(configured: &str, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(env) if !env.is_empty() => env.to_string(),
        _ => configured.trim().to_string(),
    }
}

/// Short label for a file count, used by the popup content.
pub fn records_label(count: usize) -> String {
    match count {
        0 => "No files yet".to_string(),
        1 => "1 file dropped".to_string(),
        n => format!("{} files dropped", n),
    }
}
