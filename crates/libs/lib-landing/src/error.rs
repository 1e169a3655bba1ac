//! # Error Types
//!
//! Only three things can fail on the landing page: access to the persisted
//! visit marker, sound playback, and parsing the page configuration. The first
//! two are always recovered locally by their callers; configuration errors fall
//! back to defaults.
//!
//! ```rust
//! use lib_landing::error::StoreError;
//!
//! let err = StoreError::Write("quota exceeded".to_string());
//! assert_eq!(err.to_string(), "storage write failed: quota exceeded");
//! ```

use thiserror::Error;

/// Failure while reading or writing the visit store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage backend exists (private mode, sandboxed iframe, non-browser host).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// Failure while starting a sound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    /// The host cannot create an audio element for this source.
    #[error("audio unsupported: {0}")]
    Unsupported(String),

    /// The host refused playback, usually an autoplay policy.
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Failure while loading the page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
        assert_eq!(
            SoundError::Rejected("NotAllowedError".to_string()).to_string(),
            "playback rejected: NotAllowedError"
        );
        assert_eq!(
            ConfigError::Invalid("storage_key is empty".to_string()).to_string(),
            "invalid config: storage_key is empty"
        );
    }

    #[test]
    fn test_config_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
