//! Application domain model.
//!
//! This module contains pure types (no FFI dependencies) describing drag
//! payloads, popup visibility, highlight rendering, geometry and
//! configuration constants.
//!
//! Platform-specific rendering is in `platform::macos::ui`.

pub mod constants;
pub mod geometry;
pub mod highlight;
pub mod payload;
pub mod popup_state;

pub use constants::*;
pub use geometry::{Point, Rect, Size};
pub use highlight::HighlightStyle;
pub use payload::{AcceptDecision, DragPayload, PasteboardItem, PayloadDescriptor};
pub use popup_state::PopupVisibility;
