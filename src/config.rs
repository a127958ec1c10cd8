//! Session configuration from environment variables
//!
//! - `LIARSPY_SEED`: fixed RNG seed (random when unset)
//! - `LIARSPY_TICK_MS`: discussion timer tick interval (default 1000)
//! - `LIARSPY_STRICT`: enforce screen preconditions on actions (default on)
//! - `LIARSPY_MODE`, `LIARSPY_CATEGORY`, `LIARSPY_DURATION_SEC`,
//!   `LIARSPY_ALLOW_SELF_VOTE`, `LIARSPY_HIDE_WORD`: initial game settings

use crate::types::*;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub strict: bool,
    pub settings: Settings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            strict: true,
            settings: Settings::default(),
        }
    }
}

impl SessionConfig {
    /// Read the configuration from the process environment.
    ///
    /// An invalid value is logged and only that key falls back to its default.
    pub fn from_env() -> Self {
        let (config, errors) = Self::collect(|key| std::env::var(key).ok());
        for e in &errors {
            tracing::warn!("{}. Using the default for this key.", e);
        }

        tracing::info!(
            seed = ?config.seed,
            tick_ms = config.tick_interval.as_millis() as u64,
            strict = config.strict,
            mode = %config.settings.mode,
            category = %config.settings.category,
            duration_sec = config.settings.duration_sec,
            "Session config loaded"
        );
        config
    }

    /// Build a configuration from any key lookup, rejecting malformed values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, errors) = Self::collect(lookup);
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(config),
        }
    }

    /// Every valid key applied over the defaults, plus the errors for the rest
    fn collect<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut errors = Vec::new();
        let mut config = Self::default();

        if let Some(seed) = read(&get, &mut errors, "LIARSPY_SEED", parse_value) {
            config.seed = Some(seed);
        }
        if let Some(interval) = read(&get, &mut errors, "LIARSPY_TICK_MS", parse_tick) {
            config.tick_interval = interval;
        }
        if let Some(strict) = read(&get, &mut errors, "LIARSPY_STRICT", parse_bool) {
            config.strict = strict;
        }

        let settings = &mut config.settings;
        if let Some(mode) = read(&get, &mut errors, "LIARSPY_MODE", parse_value) {
            settings.mode = mode;
        }
        if let Some(category) = read(&get, &mut errors, "LIARSPY_CATEGORY", parse_value) {
            settings.category = category;
        }
        if let Some(sec) = read(&get, &mut errors, "LIARSPY_DURATION_SEC", parse_value) {
            settings.duration_sec = Settings::clamp_duration(sec);
        }
        if let Some(allow) = read(&get, &mut errors, "LIARSPY_ALLOW_SELF_VOTE", parse_bool) {
            settings.allow_self_vote = allow;
        }
        if let Some(hide) = read(&get, &mut errors, "LIARSPY_HIDE_WORD", parse_bool) {
            settings.hide_word_during_discuss = hide;
        }

        (config, errors)
    }
}

/// Look up and parse one key. Unset keys yield `None`; bad ones are recorded.
fn read<T, G, P>(get: &G, errors: &mut Vec<ConfigError>, key: &'static str, parse: P) -> Option<T>
where
    G: Fn(&str) -> Option<String>,
    P: Fn(&'static str, &str) -> Result<T, ConfigError>,
{
    let raw = get(key)?;
    match parse(key, &raw) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| invalid(key, value, e))
}

fn parse_tick(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match parse_value::<u64>(key, value)? {
        0 => Err(invalid(key, value, "must be positive")),
        ms => Ok(Duration::from_millis(ms)),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SessionConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert!(config.strict);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_reads_every_key() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("LIARSPY_SEED", "42"),
            ("LIARSPY_TICK_MS", "250"),
            ("LIARSPY_STRICT", "off"),
            ("LIARSPY_MODE", "hybrid"),
            ("LIARSPY_CATEGORY", " movie "),
            ("LIARSPY_DURATION_SEC", "300"),
            ("LIARSPY_ALLOW_SELF_VOTE", "yes"),
            ("LIARSPY_HIDE_WORD", "0"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert!(!config.strict);
        assert_eq!(config.settings.mode, GameMode::Hybrid);
        assert_eq!(config.settings.category, Category::Movie);
        assert_eq!(config.settings.duration_sec, 300);
        assert!(config.settings.allow_self_vote);
        assert!(!config.settings.hide_word_during_discuss);
    }

    #[test]
    fn test_duration_is_clamped_and_snapped() {
        let duration = |v: &str| {
            SessionConfig::from_lookup(lookup(&[("LIARSPY_DURATION_SEC", v)]))
                .unwrap()
                .settings
                .duration_sec
        };
        assert_eq!(duration("10"), 60);
        assert_eq!(duration("9000"), 600);
        assert_eq!(duration("200"), 180);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = SessionConfig::from_lookup(lookup(&[("LIARSPY_SEED", "  ")])).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = SessionConfig::from_lookup(lookup(&[("LIARSPY_MODE", "werewolf")])).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, "LIARSPY_MODE");
        assert_eq!(value, "werewolf");

        assert!(SessionConfig::from_lookup(lookup(&[("LIARSPY_SEED", "-1")])).is_err());
        assert!(SessionConfig::from_lookup(lookup(&[("LIARSPY_TICK_MS", "0")])).is_err());
        assert!(SessionConfig::from_lookup(lookup(&[("LIARSPY_HIDE_WORD", "maybe")])).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_per_key() {
        std::env::set_var("LIARSPY_SEED", "7");
        std::env::set_var("LIARSPY_MODE", "spy");
        assert_eq!(SessionConfig::from_env().seed, Some(7));

        std::env::set_var("LIARSPY_TICK_MS", "fast");
        let config = SessionConfig::from_env();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.settings.mode, GameMode::Spy);
        assert_eq!(config.tick_interval, Duration::from_millis(1000));

        std::env::remove_var("LIARSPY_SEED");
        std::env::remove_var("LIARSPY_MODE");
        std::env::remove_var("LIARSPY_TICK_MS");
    }
}
