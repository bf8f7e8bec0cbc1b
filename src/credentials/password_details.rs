use crate::credentials::CredentialRecord;
use serde_derive::Serialize;

/// Read-only view of the user password metadata.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PasswordDetails {
    /// Indicates whether the user has a password.
    pub registered: bool,
    /// Time of the last password update in milliseconds since epoch, `0` if not registered.
    pub last_update: i64,
}

impl From<Option<&CredentialRecord>> for PasswordDetails {
    fn from(password: Option<&CredentialRecord>) -> Self {
        match password {
            Some(password) => Self {
                registered: true,
                last_update: (password.created_date.unix_timestamp_nanos() / 1_000_000) as i64,
            },
            None => Self::default(),
        }
    }
}
