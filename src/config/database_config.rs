use serde_derive::{Deserialize, Serialize};

/// Configuration for the database connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. `sqlite:account.db?mode=rwc` or `sqlite::memory:`).
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "sqlite:account.db?mode=rwc".to_string(),
        }
    }
}
