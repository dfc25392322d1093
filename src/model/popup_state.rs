//! Popup visibility (pure Rust, no FFI).

/// The two states of the single popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopupVisibility {
    #[default]
    Closed,
    Open,
}

impl PopupVisibility {
    pub fn is_open(&self) -> bool {
        matches!(self, PopupVisibility::Open)
    }
}
