//! Messages carried by the decoupled notification channel.
//!
//! These events are the only contract between drop detection and the upload
//! subsystem. This module is pure Rust with no FFI dependencies, making it
//! fully testable.

use crate::model::DragPayload;

/// Where a batch of files came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSource {
    /// Files were dropped onto the tray affordance.
    Drop,
}

impl DropSource {
    /// Wire name of the source, as seen by subscribers.
    pub fn as_str(&self) -> &'static str {
        match self {
            DropSource::Drop => "drop",
        }
    }
}

/// One-shot message broadcast once per successful drop.
///
/// Has no identity beyond its payload. The coordinator never deduplicates
/// these; a subscriber that cares must do so itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDropEvent {
    pub files: DragPayload,
    pub source: DropSource,
}

impl FileDropEvent {
    /// Event for files dropped onto the tray.
    pub fn dropped(files: DragPayload) -> Self {
        Self {
            files,
            source: DropSource::Drop,
        }
    }

    /// Number of files carried by the event.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false, payloads are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> String {
        format!("{} file(s) from {}", self.len(), self.source.as_str())
    }
}
