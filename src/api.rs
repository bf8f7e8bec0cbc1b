use crate::{
    config::Config,
    credentials::{CredentialProviders, CredentialStore},
    database::Database,
};

pub struct Api {
    pub db: Database,
    pub config: Config,
    providers: CredentialProviders,
}

impl Api {
    /// Instantiates APIs collection with the specified config and database.
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            providers: CredentialProviders::new(&config.security),
            db,
            config,
        }
    }

    /// Returns a store to work with the user credentials.
    pub fn credential_store(&self) -> CredentialStore<'_> {
        CredentialStore::new(&self.db, &self.providers)
    }
}
