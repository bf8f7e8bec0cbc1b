use crate::credentials::{CredentialRecord, CredentialType};
use anyhow::Context;
use time::OffsetDateTime;

#[derive(Debug, Eq, PartialEq, Clone, sqlx::FromRow)]
pub(super) struct RawCredential {
    pub id: String,
    pub realm: String,
    pub user_id: String,
    pub credential_type: String,
    pub created_date: i64,
    pub user_label: Option<String>,
    pub secret_data: Option<String>,
    pub credential_data: Option<String>,
}

impl TryFrom<RawCredential> for CredentialRecord {
    type Error = anyhow::Error;

    fn try_from(raw: RawCredential) -> Result<Self, Self::Error> {
        Ok(CredentialRecord {
            id: raw
                .id
                .parse()
                .with_context(|| format!("Invalid credential ID: {}", raw.id))?,
            realm: raw.realm.try_into()?,
            user_id: raw.user_id.parse()?,
            credential_type: CredentialType::from(raw.credential_type),
            created_date: OffsetDateTime::from_unix_timestamp_nanos(
                i128::from(raw.created_date) * 1_000_000,
            )?,
            user_label: raw.user_label,
            secret_data: raw.secret_data,
            credential_data: raw
                .credential_data
                .map(|data| serde_json::from_str(&data))
                .transpose()
                .with_context(|| "Cannot deserialize credential data")?,
        })
    }
}

impl TryFrom<&CredentialRecord> for RawCredential {
    type Error = anyhow::Error;

    fn try_from(credential: &CredentialRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: credential.id.to_string(),
            realm: credential.realm.to_string(),
            user_id: credential.user_id.to_string(),
            credential_type: credential.credential_type.to_string(),
            created_date: i64::try_from(credential.created_date.unix_timestamp_nanos() / 1_000_000)?,
            user_label: credential.user_label.clone(),
            secret_data: credential.secret_data.clone(),
            credential_data: credential
                .credential_data
                .as_ref()
                .map(serde_json::to_string)
                .transpose()
                .with_context(|| "Cannot serialize credential data")?,
        })
    }
}
