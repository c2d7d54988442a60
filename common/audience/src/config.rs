use std::env;

use anyhow::{Context, Result};

use crate::error::ConfigError;
use crate::validator::AudienceValidator;

pub const AUDIENCE_ENV: &str = "AUTH_AUDIENCE";

/// Audience this service accepts tokens for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceConfig {
    /// Expected audience claim (aud).
    pub audience: String,
}

impl AudienceConfig {
    /// Accepts the value as given.
    pub fn new(audience: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
        }
    }

    /// Trims the value and rejects a blank audience.
    pub fn try_new(audience: &str) -> Result<Self, ConfigError> {
        normalize_audience(audience).map(Self::new)
    }

    pub fn validator(&self) -> AudienceValidator {
        AudienceValidator::new(self.audience.clone())
    }
}

pub fn load_audience_config() -> Result<AudienceConfig> {
    load_audience_config_from(|key| env::var(key).ok())
}

pub fn load_audience_config_from<F>(lookup: F) -> Result<AudienceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(AUDIENCE_ENV).ok_or(ConfigError::MissingVariable(AUDIENCE_ENV))?;
    let config = AudienceConfig::try_new(&raw)
        .with_context(|| format!("Failed to parse {AUDIENCE_ENV}"))?;
    Ok(config)
}

fn normalize_audience(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::EmptyAudience)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_trims_and_rejects_blank() {
        let config = AudienceConfig::try_new("  https://api.example.com ").expect("valid");
        assert_eq!(config.audience, "https://api.example.com");
        assert_eq!(AudienceConfig::try_new("   "), Err(ConfigError::EmptyAudience));
        assert_eq!(AudienceConfig::try_new(""), Err(ConfigError::EmptyAudience));
    }

    #[test]
    fn loads_audience_from_lookup() {
        let config = load_audience_config_from(|key| {
            (key == AUDIENCE_ENV).then(|| "api://orders".to_string())
        })
        .expect("config");
        assert_eq!(config.validator().audience(), "api://orders");
    }

    #[test]
    fn missing_variable_is_reported() {
        let err = load_audience_config_from(|_| None).expect_err("should fail");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingVariable(AUDIENCE_ENV))
        );
    }

    #[test]
    fn blank_variable_is_reported_with_context() {
        let err = load_audience_config_from(|_| Some(" ".to_string())).expect_err("should fail");
        assert_eq!(err.to_string(), "Failed to parse AUTH_AUDIENCE");
        assert_eq!(
            err.root_cause().to_string(),
            "expected audience must not be empty"
        );
    }

    #[test]
    fn load_reads_process_environment() {
        std::env::set_var(AUDIENCE_ENV, "aud1");
        let config = load_audience_config().expect("config");
        assert_eq!(config, AudienceConfig::new("aud1"));
    }
}
