mod api_ext;
mod capability;
mod jwt;
mod principal;

pub use self::{capability::Capability, jwt::Claims, principal::Principal};
