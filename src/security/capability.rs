use serde_derive::{Deserialize, Serialize};

/// Named permission a principal may hold to access account credentials.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Allows reading and modifying account credentials.
    ManageAccount,
    /// Allows reading account credentials metadata only.
    ViewProfile,
}

impl Capability {
    /// Resolves capability from the role name carried by the access token. Unknown roles don't
    /// grant any capability.
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            "manage-account" => Some(Self::ManageAccount),
            "view-profile" => Some(Self::ViewProfile),
            _ => None,
        }
    }
}
