use crate::config::PasswordPolicyConfig;
use serde_derive::{Deserialize, Serialize};

/// Configuration for the security functionality.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SecurityConfig {
    /// Secret key used to verify JWT tokens used for HTTP authentication. If not provided, all
    /// requests are treated as unauthenticated.
    pub jwt_secret: Option<String>,
    /// List of the passwords to seed at startup in `realm:user-id:password` format, separated
    /// by `|`.
    pub builtin_passwords: Option<String>,
    /// Rules applied to every new password.
    #[serde(default)]
    pub password_policy: PasswordPolicyConfig,
}
