use crate::credentials::{CredentialContainer, CredentialRecord, CredentialType};

/// Static metadata of the credential type presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialContainerDefinition {
    pub credential_type: CredentialType,
    pub category: &'static str,
    pub helptext: &'static str,
    pub enabled: bool,
    pub create_action: Option<&'static str>,
    pub update_action: Option<&'static str>,
    pub removeable: bool,
}

/// Known credential types in the order they are presented to the user.
pub static CREDENTIAL_CATALOG: [CredentialContainerDefinition; 4] = [
    CredentialContainerDefinition {
        credential_type: CredentialType::Password,
        category: "password",
        helptext: "passwordHelptext",
        enabled: true,
        create_action: None,
        update_action: Some("UPDATE_PASSWORD"),
        removeable: false,
    },
    CredentialContainerDefinition {
        credential_type: CredentialType::Otp,
        category: "two-factor",
        helptext: "otpHelptext",
        enabled: true,
        create_action: Some("CONFIGURE_TOTP"),
        update_action: None,
        removeable: true,
    },
    CredentialContainerDefinition {
        credential_type: CredentialType::WebAuthn,
        category: "two-factor",
        helptext: "webauthnHelptext",
        enabled: true,
        create_action: Some("CONFIGURE_WEBAUTHN"),
        update_action: None,
        removeable: true,
    },
    CredentialContainerDefinition {
        credential_type: CredentialType::WebAuthnPasswordless,
        category: "passwordless",
        helptext: "webauthn-passwordlessHelptext",
        enabled: true,
        create_action: Some("CONFIGURE_WEBAUTHN_STRONG"),
        update_action: None,
        removeable: true,
    },
];

impl CredentialContainerDefinition {
    /// Builds container out of the user credentials that match the definition type.
    fn to_container(&self, user_credentials: &[CredentialRecord]) -> CredentialContainer {
        CredentialContainer {
            category: self.category.to_string(),
            credential_type: self.credential_type.clone(),
            helptext: self.helptext.to_string(),
            enabled: self.enabled,
            create_action: self.create_action.map(str::to_string),
            update_action: self.update_action.map(str::to_string),
            removeable: self.removeable,
            user_credentials: user_credentials
                .iter()
                .filter(|credential| credential.credential_type == self.credential_type)
                .map(|credential| credential.clone().without_secret())
                .collect(),
        }
    }
}

/// Groups user credentials into one container per catalog entry, preserving the catalog order
/// and the order of credentials within every type. Credentials of unknown types are dropped.
pub fn group_into_containers(user_credentials: &[CredentialRecord]) -> Vec<CredentialContainer> {
    CREDENTIAL_CATALOG
        .iter()
        .map(|definition| definition.to_container(user_credentials))
        .collect()
}
