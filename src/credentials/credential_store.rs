use crate::{
    credentials::{CredentialInput, CredentialProviders, CredentialRecord, CredentialType},
    database::Database,
    users::{RealmName, UserId},
};
use uuid::Uuid;

/// Persists and retrieves user credentials, delegating type-specific logic to the registered
/// credential providers.
pub struct CredentialStore<'a> {
    db: &'a Database,
    providers: &'a CredentialProviders,
}

impl<'a> CredentialStore<'a> {
    pub fn new(db: &'a Database, providers: &'a CredentialProviders) -> Self {
        Self { db, providers }
    }

    /// Returns all credentials stored for the user, ordered by creation date.
    pub async fn get_stored_credentials(
        &self,
        realm: &RealmName,
        user_id: UserId,
    ) -> anyhow::Result<Vec<CredentialRecord>> {
        self.db.get_credentials(realm, user_id).await
    }

    /// Removes credential with the specified ID. Returns `false` if the user doesn't have such
    /// credential, it's up to the caller to decide whether it's an error.
    pub async fn remove_stored_credential(
        &self,
        realm: &RealmName,
        user_id: UserId,
        credential_id: Uuid,
    ) -> anyhow::Result<bool> {
        self.db.remove_credential(realm, user_id, credential_id).await
    }

    /// Checks whether the input matches the credential of the same type currently in effect.
    pub async fn is_valid(
        &self,
        realm: &RealmName,
        user_id: UserId,
        input: &CredentialInput,
    ) -> anyhow::Result<bool> {
        let provider = self.providers.get(&input.credential_type)?;
        let stored = self
            .db
            .get_credentials_by_type(realm, user_id, &input.credential_type)
            .await?;
        provider.is_valid(&stored, input)
    }

    /// Replaces credentials of the input type with a new one. Fails with `PolicyViolation` if
    /// the input is rejected by the credential policy.
    pub async fn update_credential(
        &self,
        realm: &RealmName,
        user_id: UserId,
        input: &CredentialInput,
    ) -> anyhow::Result<CredentialRecord> {
        let provider = self.providers.get(&input.credential_type)?;
        let stored = self
            .db
            .get_credentials_by_type(realm, user_id, &input.credential_type)
            .await?;

        let credential = provider.create_credential(realm, user_id, &stored, input)?;
        self.db.replace_credentials(&credential).await?;

        Ok(credential)
    }

    /// Returns the password credential currently in effect, if any.
    pub async fn get_password(
        &self,
        realm: &RealmName,
        user_id: UserId,
    ) -> anyhow::Result<Option<CredentialRecord>> {
        let provider = self.providers.get(&CredentialType::Password)?;
        let stored = self
            .db
            .get_credentials_by_type(realm, user_id, &CredentialType::Password)
            .await?;
        Ok(provider.current(&stored).cloned())
    }
}
