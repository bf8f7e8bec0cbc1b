use crate::{
    credentials::CredentialType,
    users::{RealmName, UserId},
};
use serde_derive::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Represents a credential stored for the user within a realm.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Unique store-assigned identifier of the credential.
    pub id: Uuid,
    /// Realm the credential is scoped to.
    #[serde(skip)]
    pub realm: RealmName,
    /// User the credential belongs to.
    #[serde(skip)]
    pub user_id: UserId,
    /// Type tag of the credential.
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    /// Date when the credential was created.
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub created_date: OffsetDateTime,
    /// Optional label assigned to the credential by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    /// Secret material (e.g. password hash), never serialized.
    #[serde(skip)]
    pub secret_data: Option<String>,
    /// Type-specific public metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_data: Option<serde_json::Value>,
}

impl CredentialRecord {
    /// Returns the same credential without any secret material attached.
    pub fn without_secret(self) -> Self {
        Self {
            secret_data: None,
            ..self
        }
    }
}
