use crate::{
    config::SecurityConfig,
    credentials::{
        CredentialInput, CredentialRecord, CredentialType, PasswordCredentialProvider,
        PasswordPolicy,
    },
    users::{RealmName, UserId},
};
use anyhow::anyhow;
use std::collections::HashMap;

/// Type-specific credential logic: reads the effective credential, validates the user input
/// against it and produces the replacement credential.
pub trait CredentialProvider: Send + Sync {
    /// Type of the credentials the provider handles.
    fn credential_type(&self) -> CredentialType;

    /// Picks the credential currently in effect out of the stored credentials.
    fn current<'r>(&self, stored: &'r [CredentialRecord]) -> Option<&'r CredentialRecord> {
        let credential_type = self.credential_type();
        stored
            .iter()
            .filter(|credential| credential.credential_type == credential_type)
            .max_by_key(|credential| credential.created_date)
    }

    /// Checks whether the input matches the credential currently in effect.
    fn is_valid(
        &self,
        stored: &[CredentialRecord],
        input: &CredentialInput,
    ) -> anyhow::Result<bool>;

    /// Creates a credential that replaces the stored ones. Rejections by the credential policy
    /// are reported as `PolicyViolation` errors.
    fn create_credential(
        &self,
        realm: &RealmName,
        user_id: UserId,
        stored: &[CredentialRecord],
        input: &CredentialInput,
    ) -> anyhow::Result<CredentialRecord>;
}

/// Registry of the credential providers, resolved once at startup.
#[derive(Default)]
pub struct CredentialProviders {
    providers: HashMap<CredentialType, Box<dyn CredentialProvider>>,
}

impl CredentialProviders {
    /// Creates a registry with all the providers supported by the service.
    pub fn new(config: &SecurityConfig) -> Self {
        Self::default().with_provider(PasswordCredentialProvider::new(PasswordPolicy::new(
            config.password_policy.clone(),
        )))
    }

    /// Registers provider, replacing the one previously registered for the same type.
    pub fn with_provider<P: CredentialProvider + 'static>(mut self, provider: P) -> Self {
        self.providers
            .insert(provider.credential_type(), Box::new(provider));
        self
    }

    /// Returns provider for the specified credential type.
    pub fn get(&self, credential_type: &CredentialType) -> anyhow::Result<&dyn CredentialProvider> {
        self.providers
            .get(credential_type)
            .map(|provider| provider.as_ref())
            .ok_or_else(|| anyhow!("No provider is registered for `{credential_type}` credentials."))
    }
}
