//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `upstream.base_url`.
pub const UPSTREAM_URL_ENV: &str = "EXTERNAL_API_URL";

/// Environment variable overriding `listener.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "GATEWAY_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => GatewayConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Unset or blank variables leave the configured value untouched.
pub fn apply_env_overrides<F>(mut config: GatewayConfig, lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_blank(UPSTREAM_URL_ENV) {
        config.upstream.base_url = url;
    }
    if let Some(addr) = non_blank(BIND_ADDRESS_ENV) {
        config.listener.bind_address = addr;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_upstream_url() {
        let config = apply_env_overrides(
            GatewayConfig::default(),
            env(&[(UPSTREAM_URL_ENV, "https://upstream.example.com/api")]),
        );
        assert_eq!(config.upstream.base_url, "https://upstream.example.com/api");
    }

    #[test]
    fn test_blank_env_keeps_default() {
        let config = apply_env_overrides(
            GatewayConfig::default(),
            env(&[(UPSTREAM_URL_ENV, "   "), (BIND_ADDRESS_ENV, "")]),
        );
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn test_env_overrides_bind_address() {
        let config = apply_env_overrides(
            GatewayConfig::default(),
            env(&[(BIND_ADDRESS_ENV, "127.0.0.1:9999")]),
        );
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_display_joins_messages() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroTimeout { field: "upstream.timeout_secs" },
            ValidationError::UnknownLogLevel("loud".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: upstream.timeout_secs must be greater than zero, unknown observability.log_level 'loud'"
        );
    }
}
