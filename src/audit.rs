mod api_ext;
mod audit_event;
mod audit_event_type;
mod database_ext;

pub use self::{audit_event::AuditEvent, audit_event_type::AuditEventType};

/// Error recorded when user fails to confirm their identity with the existing credentials.
pub const INVALID_USER_CREDENTIALS: &str = "invalid_user_credentials";
