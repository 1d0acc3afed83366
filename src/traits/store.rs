use log::warn;

use crate::settings::{FrameSettings, SettingsError};

/// Persistent home of the user's settings
pub trait SettingsStore {
    fn load(&self) -> Result<FrameSettings, SettingsError>;

    fn save(&self, settings: &FrameSettings) -> Result<(), SettingsError>;

    /// Load, falling back to defaults when the stored copy is unreadable
    fn load_or_default(&self) -> FrameSettings {
        self.load().unwrap_or_else(|e| {
            warn!("{}; using default settings", e);
            FrameSettings::default()
        })
    }
}
