use crate::{
    api::Api,
    security::{Capability, Claims, Principal},
    users::RealmName,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::{error, warn};

/// Resolves authenticated principals from the access tokens.
pub struct SecurityApiExt<'a> {
    api: &'a Api,
}

impl<'a> SecurityApiExt<'a> {
    /// Instantiates security API extension.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Authenticates principal with the specified JWT. Returns `None` if the token cannot be
    /// verified, or if JWT authentication isn't configured.
    pub fn authenticate(&self, token: &str) -> anyhow::Result<Option<Principal>> {
        let Some(ref jwt_secret) = self.api.config.security.jwt_secret else {
            error!("Cannot authenticate principal since JWT secret isn't configured.");
            return Ok(None);
        };

        let claims = match decode::<Claims>(
            token,
            &DecodingKey::from_secret(jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(token_data) => token_data.claims,
            Err(err) => {
                warn!("Cannot verify JWT: {err:?}");
                return Ok(None);
            }
        };

        let realm = match RealmName::try_from(claims.realm) {
            Ok(realm) => realm,
            Err(err) => {
                warn!(user.id = %claims.sub, "JWT carries invalid realm: {err:?}");
                return Ok(None);
            }
        };

        Ok(Some(Principal::new(
            realm,
            claims.sub,
            claims
                .roles
                .iter()
                .filter_map(|role| Capability::from_role(role)),
        )))
    }
}

impl Api {
    /// Returns an API to authenticate principals.
    pub fn security(&self) -> SecurityApiExt<'_> {
        SecurityApiExt::new(self)
    }
}
