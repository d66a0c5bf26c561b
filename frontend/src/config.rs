use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

use crate::countdown::Countdown;

/// Id of the JSON block in `index.html` holding the site configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the public sale countdown starts when the page loads.
    pub countdown: Countdown,
    pub tick_period_ms: u32,
    pub buy_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            countdown: Countdown::new(10, 8, 45, 30),
            tick_period_ms: 1000,
            buy_url: "#tokenomics".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("tick_period_ms must be greater than zero")]
    ZeroTickPeriod,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(config)
    }
}

/// Reads the embedded config block, falling back to defaults when it is
/// absent or broken.
pub fn load() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Using default site config: {}", e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.countdown, Countdown::new(10, 8, 45, 30));
        assert_eq!(config.tick_period_ms, 1000);
    }

    #[test]
    fn partial_countdown_fills_missing_units_with_zero() {
        let config = SiteConfig::from_json(r#"{"countdown": {"minutes": 1}}"#).unwrap();
        assert_eq!(config.countdown, Countdown::new(0, 0, 1, 0));
        assert_eq!(config.buy_url, "#tokenomics");
    }

    #[test]
    fn full_config_is_read() {
        let config = SiteConfig::from_json(
            r#"{
                "countdown": {"days": 1, "hours": 2, "minutes": 3, "seconds": 4},
                "tick_period_ms": 250,
                "buy_url": "https://example.org/swap"
            }"#,
        )
        .unwrap();
        assert_eq!(config.countdown, Countdown::new(1, 2, 3, 4));
        assert_eq!(config.tick_period_ms, 250);
        assert_eq!(config.buy_url, "https://example.org/swap");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SiteConfig::from_json(r#"{"countdown": "#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn negative_units_are_rejected() {
        let err = SiteConfig::from_json(r#"{"countdown": {"days": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn zero_tick_period_is_rejected() {
        let err = SiteConfig::from_json(r#"{"tick_period_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTickPeriod));
        assert_eq!(err.to_string(), "tick_period_ms must be greater than zero");
    }
}
