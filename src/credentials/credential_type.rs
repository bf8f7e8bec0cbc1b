use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Type tag of the stored credential.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum CredentialType {
    Password,
    Otp,
    WebAuthn,
    WebAuthnPasswordless,
    /// Credential type this service doesn't know how to present.
    Other(String),
}

impl CredentialType {
    /// Returns the type tag as it's stored and exposed to clients.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Password => "password",
            Self::Otp => "otp",
            Self::WebAuthn => "webauthn",
            Self::WebAuthnPasswordless => "webauthn-passwordless",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<&str> for CredentialType {
    fn from(value: &str) -> Self {
        match value {
            "password" => Self::Password,
            "otp" => Self::Otp,
            "webauthn" => Self::WebAuthn,
            "webauthn-passwordless" => Self::WebAuthnPasswordless,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CredentialType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<CredentialType> for String {
    fn from(value: CredentialType) -> Self {
        match value {
            CredentialType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for CredentialType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
