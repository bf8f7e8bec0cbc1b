use crate::{audit::AuditEvent, database::Database};
use sqlx::query;

/// Extends primary database with the audit trail methods.
impl Database {
    /// Appends event to the audit trail.
    pub async fn insert_audit_event(&self, event: &AuditEvent) -> anyhow::Result<()> {
        query(
            r#"
INSERT INTO audit_events (id, realm, user_id, type, error, created_at)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6 )
        "#,
        )
        .bind(event.id.to_string())
        .bind(event.realm.to_string())
        .bind(event.user_id.to_string())
        .bind(event.event_type.as_str())
        .bind(event.error.as_deref())
        .bind(i64::try_from(event.created_at.unix_timestamp_nanos() / 1_000_000)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::{
        audit::{AuditEvent, AuditEventType},
        tests::{mock_db, mock_user_id},
        users::RealmName,
    };
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[tokio::test]
    async fn can_add_and_retrieve_events() -> anyhow::Result<()> {
        let db = mock_db().await?;
        let realm = RealmName::try_from("master")?;
        assert!(db.get_audit_events(&realm, mock_user_id()).await?.is_empty());

        let events = vec![
            AuditEvent {
                id: Uuid::from_u128(1),
                realm: realm.clone(),
                user_id: mock_user_id(),
                event_type: AuditEventType::UpdatePassword,
                error: Some("invalid_user_credentials".to_string()),
                // January 1, 2010 11:00:00
                created_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
            },
            AuditEvent {
                id: Uuid::from_u128(2),
                realm: realm.clone(),
                user_id: mock_user_id(),
                event_type: AuditEventType::RemoveCredential,
                error: None,
                created_at: OffsetDateTime::from_unix_timestamp(1262340001)?,
            },
        ];
        for event in &events {
            db.insert_audit_event(event).await?;
        }

        assert_eq!(db.get_audit_events(&realm, mock_user_id()).await?, events);
        assert!(
            db.get_audit_events(&RealmName::try_from("acme")?, mock_user_id())
                .await?
                .is_empty()
        );

        Ok(())
    }
}
