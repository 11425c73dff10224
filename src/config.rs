//! Site configuration parsed from key/value settings.
//!
//! A static site has no runtime environment, so the browser build captures
//! the `PORTFOLIO_*` variables at compile time. Tests feed their own lookup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const CONTACT_ENDPOINT_VAR: &str = "PORTFOLIO_CONTACT_ENDPOINT";
pub const SUBMIT_DELAY_VAR: &str = "PORTFOLIO_SUBMIT_DELAY_MS";
pub const BANNER_HIDE_VAR: &str = "PORTFOLIO_BANNER_HIDE_MS";
pub const REVEAL_STAGGER_VAR: &str = "PORTFOLIO_REVEAL_STAGGER_MS";

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
pub const DEFAULT_BANNER_HIDE_MS: u64 = 5000;
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': expected whole milliseconds")]
    InvalidDuration { key: &'static str, value: String },
    #[error("invalid {key} value '{value}': expected an absolute path or http(s) URL")]
    InvalidEndpoint { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Real contact endpoint; `None` keeps the simulated submission.
    pub contact_endpoint: Option<String>,
    pub submit_delay: Duration,
    pub banner_hide: Duration,
    pub reveal_stagger: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            banner_hide: Duration::from_millis(DEFAULT_BANNER_HIDE_MS),
            reveal_stagger: Duration::from_millis(DEFAULT_REVEAL_STAGGER_MS),
        }
    }
}

impl SiteConfig {
    /// Build typed config from a settings lookup.
    ///
    /// Optional:
    /// - `PORTFOLIO_CONTACT_ENDPOINT`: unset or blank keeps the simulation
    /// - `PORTFOLIO_SUBMIT_DELAY_MS`: default 2000
    /// - `PORTFOLIO_BANNER_HIDE_MS`: default 5000
    /// - `PORTFOLIO_REVEAL_STAGGER_MS`: default 100
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let contact_endpoint = parse_endpoint(CONTACT_ENDPOINT_VAR, lookup(CONTACT_ENDPOINT_VAR))?;
        let submit_delay = parse_millis(SUBMIT_DELAY_VAR, lookup(SUBMIT_DELAY_VAR), DEFAULT_SUBMIT_DELAY_MS)?;
        let banner_hide = parse_millis(BANNER_HIDE_VAR, lookup(BANNER_HIDE_VAR), DEFAULT_BANNER_HIDE_MS)?;
        let reveal_stagger = parse_millis(REVEAL_STAGGER_VAR, lookup(REVEAL_STAGGER_VAR), DEFAULT_REVEAL_STAGGER_MS)?;
        Ok(Self { contact_endpoint, submit_delay, banner_hide, reveal_stagger })
    }

    /// Config captured from the build environment, defaults on error.
    #[must_use]
    pub fn load() -> Self {
        match Self::from_lookup(build_env) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site config invalid, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        CONTACT_ENDPOINT_VAR => option_env!("PORTFOLIO_CONTACT_ENDPOINT"),
        SUBMIT_DELAY_VAR => option_env!("PORTFOLIO_SUBMIT_DELAY_MS"),
        BANNER_HIDE_VAR => option_env!("PORTFOLIO_BANNER_HIDE_MS"),
        REVEAL_STAGGER_VAR => option_env!("PORTFOLIO_REVEAL_STAGGER_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn parse_millis(key: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(default));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDuration { key, value: raw })
}

fn parse_endpoint(key: &'static str, raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let allowed = trimmed.starts_with('/') || trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !allowed {
        return Err(ConfigError::InvalidEndpoint { key, value: raw });
    }
    let endpoint = trimmed.trim_end_matches('/');
    Ok(Some(if endpoint.is_empty() { "/".to_owned() } else { endpoint.to_owned() }))
}
