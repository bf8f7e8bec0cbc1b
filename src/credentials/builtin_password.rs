use crate::users::{RealmName, UserId};
use anyhow::bail;

/// Password seeded at startup for the user that doesn't have one yet.
#[derive(Clone)]
pub struct BuiltinPassword {
    pub realm: RealmName,
    pub user_id: UserId,
    pub password: String,
}

impl std::fmt::Debug for BuiltinPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinPassword")
            .field("realm", &self.realm)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&str> for BuiltinPassword {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Password is the last property and may contain `:` itself.
        let properties = value.splitn(3, ':').collect::<Vec<_>>();
        if properties.len() != 3 {
            bail!("Builtin password is malformed.");
        }

        let password = properties[2].trim();
        if password.is_empty() {
            bail!("Builtin password cannot be empty.");
        }

        Ok(BuiltinPassword {
            realm: RealmName::try_from(properties[0].trim())?,
            user_id: properties[1].trim().parse()?,
            password: password.to_string(),
        })
    }
}
