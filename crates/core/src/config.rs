use std::time::Duration;

use crate::provider::{Provider, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Runtime settings for one analysis session.
///
/// | Env Var                            | Default                 |
/// |------------------------------------|-------------------------|
/// | `GEMINI_API_KEY`                   | required                |
/// | `SWINGCOACH_MODEL`                 | `gemini-2.5-flash`      |
/// | `SWINGCOACH_SEEK_TIMEOUT_SECS`     | `10`                    |
/// | `SWINGCOACH_REQUEST_TIMEOUT_SECS`  | `120`                   |
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    /// Upper bound on a single seek-and-decode step.
    pub seek_timeout: Duration,
    pub request_timeout: Duration,
}

pub const DEFAULT_SEEK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

impl AnalyzerConfig {
    pub fn from_env(provider: Provider) -> Result<Self, ConfigError> {
        Self::from_lookup(provider, |var| std::env::var(var).ok())
    }

    pub fn from_lookup(
        provider: Provider,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let provider_config = provider.config();

        let api_key = lookup(provider_config.env_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey {
                env_var: provider_config.env_var.to_string(),
            })?;

        let model = lookup("SWINGCOACH_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| provider_config.default_model.to_string());

        let seek_timeout = parse_seconds(
            "SWINGCOACH_SEEK_TIMEOUT_SECS",
            lookup("SWINGCOACH_SEEK_TIMEOUT_SECS"),
            DEFAULT_SEEK_TIMEOUT_SECS,
        )?;
        let request_timeout = parse_seconds(
            "SWINGCOACH_REQUEST_TIMEOUT_SECS",
            lookup("SWINGCOACH_REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            provider,
            api_key,
            model,
            seek_timeout,
            request_timeout,
        })
    }
}

fn parse_seconds(
    var: &'static str,
    value: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidSeconds { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg =
            AnalyzerConfig::from_lookup(Provider::Gemini, lookup_from(&[("GEMINI_API_KEY", "k")]))
                .unwrap();

        assert_eq!(cfg.api_key, "k");
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.seek_timeout, Duration::from_secs(10));
        assert_eq!(cfg.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = AnalyzerConfig::from_lookup(
            Provider::Gemini,
            lookup_from(&[
                ("GEMINI_API_KEY", "k"),
                ("SWINGCOACH_MODEL", "gemini-2.5-pro"),
                ("SWINGCOACH_SEEK_TIMEOUT_SECS", "3"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.model, "gemini-2.5-pro");
        assert_eq!(cfg.seek_timeout, Duration::from_secs(3));
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = AnalyzerConfig::from_lookup(Provider::Gemini, lookup_from(&[("GEMINI_API_KEY", "  ")]))
            .unwrap_err();
        assert_matches!(err, ConfigError::Provider(ProviderError::MissingApiKey { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AnalyzerConfig::from_lookup(
            Provider::Gemini,
            lookup_from(&[("GEMINI_API_KEY", "k"), ("SWINGCOACH_SEEK_TIMEOUT_SECS", "0")]),
        )
        .unwrap_err();
        assert_matches!(
            err,
            ConfigError::InvalidSeconds {
                var: "SWINGCOACH_SEEK_TIMEOUT_SECS",
                ..
            }
        );
    }
}
