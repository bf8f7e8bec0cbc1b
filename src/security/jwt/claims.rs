use crate::users::UserId;
use serde_derive::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};
use time::OffsetDateTime;

/// JWT claims struct.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Claims {
    /// ID of the user the token was issued to.
    pub sub: UserId,
    /// Realm the token was issued in.
    pub realm: String,
    /// Token expiration time (UTC timestamp).
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub exp: OffsetDateTime,
    /// Account roles granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
}
