//! Settings error types.

/// Errors from validating, loading or saving screen settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The new settings were rejected
    #[error("validation error: {0}")]
    Validation(String),

    /// Reading or writing the settings file failed
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SettingsError::Validation("slide interval must be at least 1000 ms".into());
        assert_eq!(
            err.to_string(),
            "validation error: slide interval must be at least 1000 ms"
        );

        let err = SettingsError::from(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "settings file error: disk full");
    }
}
