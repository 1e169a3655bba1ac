//! # Landing Configuration
//!
//! Every field has a default, so an empty JSON object is a valid config. The web
//! build reads an optional JSON block embedded in `index.html`:
//!
//! ```html
//! <script id="landing-config" type="application/json">
//!   { "intro_delay_ms": 1500, "event_start": "2026-11-20T09:00:00+05:30" }
//! </script>
//! ```
//!
//! ```rust
//! use lib_landing::LandingConfig;
//!
//! let config = LandingConfig::from_json(r#"{ "intro_delay_ms": 1500 }"#).unwrap();
//! assert_eq!(config.intro_delay_ms, 1500);
//! assert_eq!(config.storage_key, "elicit_seen_intro");
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audio::CLICK_SOUND;
use crate::error::ConfigError;
use crate::intro::{IntroSettings, DEFAULT_INTRO_DELAY_MS, DEFAULT_SEEN_MARKER, DEFAULT_STORAGE_KEY};
use crate::sponsors::SponsorWheel;

pub const DEFAULT_EVENT_START: &str = "2026-11-20T09:00:00+05:30";
pub const DEFAULT_LEGACY_REGISTER_HREF: &str = "/CyberpunkEvents.tsx";
/// Largest delay `setTimeout` accepts.
pub const MAX_INTRO_DELAY_MS: u64 = i32::MAX as u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Local storage key of the "seen intro" marker.
    pub storage_key: String,
    pub seen_marker: String,
    pub intro_delay_ms: u64,
    pub click_sound: String,
    /// Full-page navigation target of the register button.
    pub legacy_register_href: String,
    /// RFC 3339 start of the event.
    pub event_start: String,
    pub sponsor_wheel: SponsorWheel,
    pub social_links: Vec<SocialLink>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seen_marker: DEFAULT_SEEN_MARKER.to_string(),
            intro_delay_ms: DEFAULT_INTRO_DELAY_MS,
            click_sound: CLICK_SOUND.to_string(),
            legacy_register_href: DEFAULT_LEGACY_REGISTER_HREF.to_string(),
            event_start: DEFAULT_EVENT_START.to_string(),
            sponsor_wheel: SponsorWheel::default(),
            social_links: vec![
                SocialLink {
                    label: "INSTAGRAM".to_string(),
                    href: "https://www.instagram.com/".to_string(),
                },
                SocialLink {
                    label: "LINKEDIN".to_string(),
                    href: "https://www.linkedin.com/".to_string(),
                },
            ],
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key is empty".to_string()));
        }
        if self.seen_marker.is_empty() {
            return Err(ConfigError::Invalid("seen_marker is empty".to_string()));
        }
        if self.click_sound.is_empty() {
            return Err(ConfigError::Invalid("click_sound is empty".to_string()));
        }
        // Browser timers take a signed 32-bit millisecond delay.
        if self.intro_delay_ms > MAX_INTRO_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "intro_delay_ms {} exceeds {} ms",
                self.intro_delay_ms, MAX_INTRO_DELAY_MS
            )));
        }
        self.event_start_utc()?;
        Ok(())
    }

    pub fn event_start_utc(&self) -> Result<DateTime<Utc>, ConfigError> {
        DateTime::parse_from_rfc3339(&self.event_start)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ConfigError::Invalid(format!("event_start: {}", e)))
    }

    pub fn intro_settings(&self) -> IntroSettings {
        IntroSettings {
            storage_key: self.storage_key.clone(),
            seen_marker: self.seen_marker.clone(),
            delay: Duration::from_millis(self.intro_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = LandingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intro_settings(), IntroSettings::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(LandingConfig::from_json("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LandingConfig::from_json(
            r#"{ "storage_key": "seen", "sponsor_wheel": { "radius": 5.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "seen");
        assert_eq!(config.sponsor_wheel.radius, 5.0);
        assert_eq!(config.sponsor_wheel.logos.len(), 10);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            LandingConfig::from_json(r#"{ "storage_key": "" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            LandingConfig::from_json(r#"{ "event_start": "next tuesday" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            LandingConfig::from_json(r#"{ "intro_delay_ms": 3000000000 }"#),
            Err(ConfigError::Invalid(msg)) if msg.starts_with("intro_delay_ms")
        ));
        assert!(matches!(
            LandingConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_intro_delay_upper_bound_accepted() {
        let json = format!(r#"{{ "intro_delay_ms": {} }}"#, MAX_INTRO_DELAY_MS);
        let config = LandingConfig::from_json(&json).unwrap();
        assert!(i32::try_from(config.intro_settings().delay.as_millis()).is_ok());
    }

    #[test]
    fn test_event_start_timezone() {
        let config = LandingConfig::default();
        let start = config.event_start_utc().unwrap();
        assert_eq!(start.to_rfc3339(), "2026-11-20T03:30:00+00:00");
    }
}
