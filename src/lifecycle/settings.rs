//! Settings window presentation: reuse the visible window or make one.

use super::host::SettingsHost;
use crate::model::Size;

/// What `present()` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    Reused,
    Created,
}

pub struct SettingsPresenter<S: SettingsHost> {
    host: S,
    size: Size,
}

impl<S: SettingsHost> SettingsPresenter<S> {
    pub fn new(host: S, size: Size) -> Self {
        Self { host, size }
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    /// Bring the single settings window to the front, creating it centred
    /// on the primary display when none is visible.
    pub fn present(&self) -> SettingsOutcome {
        if let Some(window) = self.host.visible_window() {
            if self.host.bring_to_front(&window) {
                return SettingsOutcome::Reused;
            }
            log::debug!("Settings window closed before it could be raised, creating a new one");
        }

        let frame = self.host.primary_display().centered(self.size);
        let window = self.host.create_window(frame);
        if !self.host.bring_to_front(&window) {
            log::warn!("Freshly created settings window could not be raised");
        }
        SettingsOutcome::Created
    }
}
