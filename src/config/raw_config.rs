use crate::config::{DatabaseConfig, SecurityConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Security configuration (JWT, password policy, builtin passwords).
    pub security: SecurityConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("SECUTILS_ACCOUNT_").split("__"))
            .extract()?)
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 7171,
            db: DatabaseConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Account credentials main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}
