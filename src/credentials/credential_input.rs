use crate::credentials::CredentialType;
use std::fmt::{Debug, Formatter};

/// Plaintext credential supplied by the user, either to verify against the stored credential or
/// to replace it.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialInput {
    pub credential_type: CredentialType,
    pub value: String,
}

impl CredentialInput {
    /// Creates password credential input.
    pub fn password(value: impl Into<String>) -> Self {
        Self {
            credential_type: CredentialType::Password,
            value: value.into(),
        }
    }
}

impl Debug for CredentialInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialInput")
            .field("credential_type", &self.credential_type)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
