use crate::credentials::{CredentialRecord, CredentialType};
use serde_derive::Serialize;

/// Presentation grouping of the user credentials of the same type together with the metadata UI
/// needs to render it. Text attributes are message keys resolved by the client-side localizer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialContainer {
    pub category: String,
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub helptext: String,
    pub enabled: bool,
    pub create_action: Option<String>,
    pub update_action: Option<String>,
    pub removeable: bool,
    /// Credentials of this type, secrets stripped.
    pub user_credentials: Vec<CredentialRecord>,
}
