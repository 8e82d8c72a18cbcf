//! # Site Configuration
//!
//! Settings are read from a TOML file, then overridden from `SITE_*` environment
//! variables, then validated. Every field has a default, so an empty file (or no file)
//! yields a working configuration.
//!
//! ```toml
//! [actor]
//! buffer_size = 32
//!
//! [query]
//! retries = 3
//!
//! [access]
//! admins = ["aaaaa-aa"]
//!
//! [assets]
//! public_path = "/assets/generated"
//! ```

use crate::model::Principal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Channel capacity of every resource actor.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Extra attempts a failed read makes before it reports failure.
    pub retries: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { retries: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Principals that start with the admin role.
    pub admins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// URL path gallery filenames are resolved against.
    pub public_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            public_path: "/assets/generated".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub actor: ActorConfig,
    pub query: QueryConfig,
    pub access: AccessConfig,
    pub assets: AssetConfig,
}

impl SiteConfig {
    /// Loads `path`, applies environment overrides and validates the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from_file(path)?;
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `SITE_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<(), ConfigError> {
        self.merge_with_vars(std::env::vars())
    }

    /// Applies `SITE_*` overrides from `vars`. Unknown keys are ignored.
    pub fn merge_with_vars(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), ConfigError> {
        for (key, value) in vars {
            match key.as_str() {
                "SITE_ACTOR_BUFFER_SIZE" => self.actor.buffer_size = parse_env(&key, &value)?,
                "SITE_QUERY_RETRIES" => self.query.retries = parse_env(&key, &value)?,
                "SITE_ACCESS_ADMINS" => {
                    self.access.admins = value
                        .split(',')
                        .map(str::trim)
                        .filter(|admin| !admin.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "SITE_ASSETS_PUBLIC_PATH" => self.assets.public_path = value,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actor.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "actor.buffer_size must be greater than 0".to_string(),
            ));
        }
        if !self.assets.public_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "assets.public_path must start with '/': {}",
                self.assets.public_path
            )));
        }
        Ok(())
    }

    /// The configured admins as principals.
    pub fn admin_principals(&self) -> Vec<Principal> {
        self.access.admins.iter().map(Principal::new).collect()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.actor.buffer_size, 32);
        assert_eq!(config.query.retries, 3);
        assert_eq!(config.assets.public_path, "/assets/generated");
        assert!(config.access.admins.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [access]
            admins = ["aaaaa-aa", "bbbbb-bb"]

            [query]
            retries = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.access.admins, vec!["aaaaa-aa", "bbbbb-bb"]);
        assert_eq!(config.query.retries, 0);
        assert_eq!(config.actor.buffer_size, 32);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = SiteConfig::from_toml("[actor]\nbuffer_size = 8\n").unwrap();
        config
            .merge_with_vars(vars(&[
                ("SITE_ACTOR_BUFFER_SIZE", "64"),
                ("SITE_ACCESS_ADMINS", "aaaaa-aa, ,ccccc-cc"),
                ("SITE_ASSETS_PUBLIC_PATH", "/static"),
                ("HOME", "/root"),
            ]))
            .unwrap();
        assert_eq!(config.actor.buffer_size, 64);
        assert_eq!(config.access.admins, vec!["aaaaa-aa", "ccccc-cc"]);
        assert_eq!(config.assets.public_path, "/static");
        assert_eq!(
            config.admin_principals(),
            vec![Principal::new("aaaaa-aa"), Principal::new("ccccc-cc")]
        );
    }

    #[test]
    fn test_bad_env_value_is_reported() {
        let mut config = SiteConfig::default();
        let err = config
            .merge_with_vars(vars(&[("SITE_QUERY_RETRIES", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key, .. } if key == "SITE_QUERY_RETRIES"));
    }

    #[test]
    fn test_validation_rules() {
        let mut config = SiteConfig::default();
        config.actor.buffer_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SiteConfig::default();
        config.assets.public_path = "assets".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml("[actor\nbuffer_size = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
