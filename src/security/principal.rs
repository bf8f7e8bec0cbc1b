use crate::{
    error::Error as SecutilsError,
    security::Capability,
    users::{RealmName, UserId},
};
use std::collections::HashSet;

/// Authenticated caller: the user acting on their own account within a realm, together with the
/// capabilities granted to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Realm the principal is authenticated in.
    pub realm: RealmName,
    /// ID of the user the principal acts as.
    pub user_id: UserId,
    /// Capabilities granted to the principal.
    pub capabilities: HashSet<Capability>,
}

impl Principal {
    /// Creates a new principal with the specified capabilities.
    pub fn new(
        realm: RealmName,
        user_id: UserId,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> Self {
        Self {
            realm,
            user_id,
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Fails with access forbidden error if the principal doesn't hold the capability.
    pub fn require(&self, capability: Capability) -> Result<(), SecutilsError> {
        self.require_one_of(&[capability])
    }

    /// Fails with access forbidden error if the principal holds none of the capabilities.
    pub fn require_one_of(&self, capabilities: &[Capability]) -> Result<(), SecutilsError> {
        if capabilities
            .iter()
            .any(|capability| self.capabilities.contains(capability))
        {
            Ok(())
        } else {
            Err(SecutilsError::access_forbidden())
        }
    }

    /// Fails with access forbidden error if the principal is authenticated in another realm.
    pub fn require_realm(&self, realm: &str) -> Result<(), SecutilsError> {
        if &*self.realm == realm {
            Ok(())
        } else {
            Err(SecutilsError::access_forbidden())
        }
    }
}
