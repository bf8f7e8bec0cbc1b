mod database_config;
mod password_policy_config;
mod raw_config;
mod security_config;

pub use self::{
    database_config::DatabaseConfig, password_policy_config::PasswordPolicyConfig,
    raw_config::RawConfig, security_config::SecurityConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the binary.
    pub version: String,
    /// HTTP port to bind API server to.
    pub http_port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Security configuration (JWT, password policy, builtin passwords).
    pub security: SecurityConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            http_port: raw_config.port,
            db: raw_config.db,
            security: raw_config.security,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, RawConfig};

    #[test]
    fn conversion_from_raw_config() {
        let mut raw_config = RawConfig::default();
        raw_config.port = 8080;
        raw_config.security.jwt_secret = Some("secret".to_string());

        let config = Config::from(raw_config);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.db.path, "sqlite:account.db?mode=rwc");
        assert_eq!(config.security.jwt_secret.as_deref(), Some("secret"));
        assert_eq!(config.security.password_policy.min_length, 8);
    }
}
