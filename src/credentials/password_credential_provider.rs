use crate::{
    credentials::{
        CredentialInput, CredentialProvider, CredentialRecord, CredentialType, PasswordPolicy,
    },
    users::{RealmName, UserId},
};
use anyhow::{Context, anyhow, bail};
use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString},
};
use rand_core::OsRng;
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

/// Stores passwords as Argon2id hashes and enforces password policy on updates.
pub struct PasswordCredentialProvider {
    policy: PasswordPolicy,
}

impl PasswordCredentialProvider {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    fn hash_password(password: &str) -> anyhow::Result<String> {
        Argon2::default()
            .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
            .map(|hash| hash.to_string())
            .map_err(|err| anyhow!("Failed to generate a password hash: {err}"))
    }

    fn verify_password(password: &str, password_hash: &str) -> anyhow::Result<bool> {
        let password_hash = PasswordHash::new(password_hash)
            .map_err(|err| anyhow!("Failed to parse stored password hash: {err}"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &password_hash)
            .is_ok())
    }
}

impl CredentialProvider for PasswordCredentialProvider {
    fn credential_type(&self) -> CredentialType {
        CredentialType::Password
    }

    fn is_valid(
        &self,
        stored: &[CredentialRecord],
        input: &CredentialInput,
    ) -> anyhow::Result<bool> {
        if input.credential_type != CredentialType::Password || input.value.is_empty() {
            return Ok(false);
        }

        match self
            .current(stored)
            .and_then(|password| password.secret_data.as_deref())
        {
            Some(password_hash) => Self::verify_password(&input.value, password_hash),
            None => Ok(false),
        }
    }

    fn create_credential(
        &self,
        realm: &RealmName,
        user_id: UserId,
        stored: &[CredentialRecord],
        input: &CredentialInput,
    ) -> anyhow::Result<CredentialRecord> {
        if input.credential_type != CredentialType::Password {
            bail!(
                "Password provider cannot create `{}` credentials.",
                input.credential_type
            );
        }

        self.policy.validate(&input.value)?;
        if self.policy.requires_new_password() && self.is_valid(stored, input)? {
            return Err(PasswordPolicy::reused_password_violation().into());
        }

        // Creation date is exposed with millisecond precision, store it the same way.
        let now = OffsetDateTime::now_utc();
        let created_date = now
            .replace_nanosecond(u32::from(now.millisecond()) * 1_000_000)
            .with_context(|| "Failed to truncate credential creation date.")?;

        Ok(CredentialRecord {
            id: Uuid::now_v7(),
            realm: realm.clone(),
            user_id,
            credential_type: CredentialType::Password,
            created_date,
            user_label: None,
            secret_data: Some(Self::hash_password(&input.value)?),
            credential_data: Some(json!({ "algorithm": "argon2id" })),
        })
    }
}
