use crate::{
    api::Api,
    audit::{AuditEvent, AuditEventType},
    users::{RealmName, UserId},
};
use time::OffsetDateTime;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Audit event opened for the operation attempt, recorded once the outcome is known.
pub struct AuditEventRecorder<'a> {
    api: &'a Api,
    realm: RealmName,
    user_id: UserId,
    event_type: AuditEventType,
}

impl<'a> AuditEventRecorder<'a> {
    pub fn new(api: &'a Api, realm: RealmName, user_id: UserId, event_type: AuditEventType) -> Self {
        Self {
            api,
            realm,
            user_id,
            event_type,
        }
    }

    /// Records successful operation. Failure to persist the event is logged and doesn't affect
    /// the outcome of the already completed operation.
    pub async fn success(self) {
        info!(
            realm = %self.realm,
            user.id = %self.user_id,
            event.r#type = %self.event_type,
            "Account operation succeeded."
        );
        self.record(None).await
    }

    /// Records failed operation with the specified error key.
    pub async fn error(self, error: &str) {
        warn!(
            realm = %self.realm,
            user.id = %self.user_id,
            event.r#type = %self.event_type,
            event.error = error,
            "Account operation failed."
        );
        self.record(Some(error.to_string())).await
    }

    async fn record(self, error: Option<String>) {
        let audit_event = AuditEvent {
            id: Uuid::now_v7(),
            realm: self.realm,
            user_id: self.user_id,
            event_type: self.event_type,
            error,
            created_at: OffsetDateTime::now_utc(),
        };
        if let Err(err) = self.api.db.insert_audit_event(&audit_event).await {
            error!(
                realm = %audit_event.realm,
                user.id = %audit_event.user_id,
                event.r#type = %audit_event.event_type,
                "Failed to record audit event: {err:?}"
            );
        }
    }
}

impl Api {
    /// Opens audit event for the operation performed on behalf of the user.
    pub fn audit_event(
        &self,
        realm: &RealmName,
        user_id: UserId,
        event_type: AuditEventType,
    ) -> AuditEventRecorder<'_> {
        AuditEventRecorder::new(self, realm.clone(), user_id, event_type)
    }
}
