use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Type of the account operation recorded in the audit trail.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    UpdatePassword,
    RemoveCredential,
}

impl AuditEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdatePassword => "UPDATE_PASSWORD",
            Self::RemoveCredential => "REMOVE_CREDENTIAL",
        }
    }
}

impl TryFrom<&str> for AuditEventType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "UPDATE_PASSWORD" => Ok(Self::UpdatePassword),
            "REMOVE_CREDENTIAL" => Ok(Self::RemoveCredential),
            unknown => Err(anyhow::anyhow!("Unknown audit event type: {unknown}")),
        }
    }
}

impl Display for AuditEventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
