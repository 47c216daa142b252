// src/config.rs
use std::net::SocketAddr;

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";
pub const BASE_URL: &str = "https://api.deepseek.com/v1";
pub const MODEL: &str = "deepseek-chat";
pub const TEMPERATURE: f32 = 0.7;
pub const PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),
}

/// Startup configuration, validated once before the server binds.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Secret<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        Ok(Self::with_api_key(api_key))
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: BASE_URL.to_string(),
            model: MODEL.to_string(),
            temperature: TEMPERATURE,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], PORT)),
        }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.to_string(), "DEEPSEEK_API_KEY not set");
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(API_KEY_VAR)));
    }

    #[test]
    fn upstream_settings_are_fixed() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            (config.base_url.as_str(), config.model.as_str(), config.bind_addr.port()),
            (BASE_URL, MODEL, PORT)
        );
        assert_eq!(config.temperature, TEMPERATURE);
    }

    #[test]
    fn debug_output_hides_key() {
        let config = Config::with_api_key("sk-very-secret");
        assert!(!format!("{config:?}").contains("sk-very-secret"));
    }
}
