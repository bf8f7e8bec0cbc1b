mod realm_name;
mod user_id;

pub use self::{realm_name::RealmName, user_id::UserId};
