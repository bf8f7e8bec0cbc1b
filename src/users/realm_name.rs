use serde_derive::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    ops::Deref,
};

/// Name of the realm (tenant) users and their credentials are scoped to.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct RealmName(String);

impl TryFrom<String> for RealmName {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value.len() > 255 {
            anyhow::bail!("Realm name must be between 1 and 255 characters.");
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for RealmName {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<RealmName> for String {
    fn from(value: RealmName) -> Self {
        value.0
    }
}

impl Deref for RealmName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RealmName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
