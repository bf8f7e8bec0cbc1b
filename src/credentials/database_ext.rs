mod raw_credential;

use self::raw_credential::RawCredential;
use crate::{
    credentials::{CredentialRecord, CredentialType},
    database::Database,
    users::{RealmName, UserId},
};
use sqlx::{query, query_as};
use uuid::Uuid;

/// Extends primary database with the credentials management-related methods.
impl Database {
    /// Retrieves all credentials of the user, ordered by creation date.
    pub async fn get_credentials(
        &self,
        realm: &RealmName,
        user_id: UserId,
    ) -> anyhow::Result<Vec<CredentialRecord>> {
        query_as::<_, RawCredential>(
            r#"
SELECT id, realm, user_id, type as credential_type, created_date, user_label, secret_data, credential_data
FROM user_credentials
WHERE realm = ?1 AND user_id = ?2
ORDER BY created_date ASC, rowid ASC
                "#,
        )
        .bind(realm.to_string())
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(CredentialRecord::try_from)
        .collect()
    }

    /// Retrieves credentials of the specified type, ordered by creation date.
    pub async fn get_credentials_by_type(
        &self,
        realm: &RealmName,
        user_id: UserId,
        credential_type: &CredentialType,
    ) -> anyhow::Result<Vec<CredentialRecord>> {
        query_as::<_, RawCredential>(
            r#"
SELECT id, realm, user_id, type as credential_type, created_date, user_label, secret_data, credential_data
FROM user_credentials
WHERE realm = ?1 AND user_id = ?2 AND type = ?3
ORDER BY created_date ASC, rowid ASC
                "#,
        )
        .bind(realm.to_string())
        .bind(user_id.to_string())
        .bind(credential_type.to_string())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(CredentialRecord::try_from)
        .collect()
    }

    /// Inserts credential to the `user_credentials` table, fails if credential already exists.
    #[cfg(test)]
    pub async fn insert_credential(&self, credential: &CredentialRecord) -> anyhow::Result<()> {
        let raw_credential = RawCredential::try_from(credential)?;
        query(
            r#"
INSERT INTO user_credentials (id, realm, user_id, type, created_date, user_label, secret_data, credential_data)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8 )
        "#,
        )
        .bind(raw_credential.id)
        .bind(raw_credential.realm)
        .bind(raw_credential.user_id)
        .bind(raw_credential.credential_type)
        .bind(raw_credential.created_date)
        .bind(raw_credential.user_label)
        .bind(raw_credential.secret_data)
        .bind(raw_credential.credential_data)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Atomically replaces all user credentials of the same type with the specified credential.
    pub async fn replace_credentials(&self, credential: &CredentialRecord) -> anyhow::Result<()> {
        let raw_credential = RawCredential::try_from(credential)?;

        let mut transaction = self.pool.begin().await?;
        query(
            r#"
DELETE FROM user_credentials
WHERE realm = ?1 AND user_id = ?2 AND type = ?3
        "#,
        )
        .bind(&raw_credential.realm)
        .bind(&raw_credential.user_id)
        .bind(&raw_credential.credential_type)
        .execute(&mut *transaction)
        .await?;

        query(
            r#"
INSERT INTO user_credentials (id, realm, user_id, type, created_date, user_label, secret_data, credential_data)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8 )
        "#,
        )
        .bind(raw_credential.id)
        .bind(raw_credential.realm)
        .bind(raw_credential.user_id)
        .bind(raw_credential.credential_type)
        .bind(raw_credential.created_date)
        .bind(raw_credential.user_label)
        .bind(raw_credential.secret_data)
        .bind(raw_credential.credential_data)
        .execute(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(())
    }

    /// Removes user credential with the specified ID. Returns `false` if there was no such
    /// credential.
    pub async fn remove_credential(
        &self,
        realm: &RealmName,
        user_id: UserId,
        id: Uuid,
    ) -> anyhow::Result<bool> {
        let result = query(
            r#"
DELETE FROM user_credentials
WHERE realm = ?1 AND user_id = ?2 AND id = ?3
            "#,
        )
        .bind(realm.to_string())
        .bind(user_id.to_string())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
