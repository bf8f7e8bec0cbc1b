/// Describes a rejection of the new credential by the store policy (e.g. password complexity).
/// It's an expected outcome that is reported to the user, not an internal failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PolicyViolation {
    /// Message key that describes the violated rule.
    pub message: String,
    /// Parameters the client needs to render the message (e.g. minimum length).
    pub parameters: Vec<String>,
}

impl PolicyViolation {
    /// Creates a new policy violation with the specified message key and parameters.
    pub fn new(message: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            message: message.into(),
            parameters,
        }
    }
}
