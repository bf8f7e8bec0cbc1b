use crate::{
    audit::AuditEventType,
    users::{RealmName, UserId},
};
use serde_derive::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Record of the account operation attempt.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: Uuid,
    pub realm: RealmName,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub event_type: AuditEventType,
    /// Error key if the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(with = "time::serde::timestamp::milliseconds")]
    pub created_at: OffsetDateTime,
}
