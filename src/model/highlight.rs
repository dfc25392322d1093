//! Hover highlight of the drop surface.

use super::constants::{HIGHLIGHT_BACKGROUND_ALPHA, HIGHLIGHT_CORNER_RADIUS};

/// How the drop surface should be rendered right now.
///
/// Colours are the system accent colour at the given alpha; the platform
/// view resolves the actual colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    /// Alpha of the background tint, 0 = no tint.
    pub background_alpha: f64,
    pub corner_radius: f64,
    /// Whether the status icon is tinted with the accent colour.
    pub tint_icon: bool,
}

impl HighlightStyle {
    /// No drag hovering.
    pub const IDLE: Self = Self {
        background_alpha: 0.0,
        corner_radius: 0.0,
        tint_icon: false,
    };

    /// An accepted drag is hovering.
    pub const HOVER: Self = Self {
        background_alpha: HIGHLIGHT_BACKGROUND_ALPHA,
        corner_radius: HIGHLIGHT_CORNER_RADIUS,
        tint_icon: true,
    };

    pub fn is_active(&self) -> bool {
        self.background_alpha > 0.0 || self.tint_icon
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::IDLE
    }
}
