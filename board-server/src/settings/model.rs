//! Screen settings.

use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// Shortest slide interval the screen accepts, in milliseconds.
pub const MIN_SLIDE_INTERVAL_MS: u32 = 1000;

/// Presentation settings for the screen showing the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSettings {
    /// Dark colour scheme.
    pub dark_mode: bool,

    /// How long the screen shows each slide before moving on.
    pub slide_interval_ms: u32,
}

impl ScreenSettings {
    /// Reject settings the screen cannot use.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.slide_interval_ms < MIN_SLIDE_INTERVAL_MS {
            return Err(SettingsError::Validation(format!(
                "slide interval must be at least {MIN_SLIDE_INTERVAL_MS} ms"
            )));
        }
        Ok(())
    }
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            slide_interval_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = ScreenSettings::default();
        assert!(!settings.dark_mode);
        assert_eq!(settings.slide_interval_ms, 3000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn slide_interval_lower_bound() {
        let mut settings = ScreenSettings::default();

        settings.slide_interval_ms = MIN_SLIDE_INTERVAL_MS;
        assert!(settings.validate().is_ok());

        settings.slide_interval_ms = MIN_SLIDE_INTERVAL_MS - 1;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Validation(_))
        ));
    }
}
