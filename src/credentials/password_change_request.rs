use serde_derive::Deserialize;

/// Request to change the user password.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    /// Current password, re-verified before any change is made.
    #[serde(default)]
    pub current_password: String,
    /// New password.
    pub new_password: Option<String>,
    /// Optional confirmation that must match the new password if provided.
    pub confirmation: Option<String>,
}
