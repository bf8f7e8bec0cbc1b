use crate::{credentials::PolicyViolation, error::Error as SecutilsError};

/// Message key reported when the current password can't be verified.
const INVALID_PASSWORD_EXISTING: &str = "invalidPasswordExistingMessage";
/// Message key reported when the password confirmation doesn't match the new password.
const NOT_MATCH_PASSWORD: &str = "notMatchPasswordMessage";

/// Represents possible failures of the password change.
#[derive(thiserror::Error, Debug)]
pub enum PasswordChangeError {
    /// Principal isn't allowed to manage the account.
    #[error("Access Forbidden")]
    Forbidden,
    /// Current password is incorrect or the new password is missing.
    #[error("invalidPasswordExistingMessage")]
    InvalidExistingCredential,
    /// Confirmation doesn't match the new password.
    #[error("notMatchPasswordMessage")]
    PasswordConfirmationMismatch,
    /// New password was rejected by the password policy.
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),
    /// Store failed to complete the operation.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl PasswordChangeError {
    /// Translates the store failure, keeping policy violations apart from infrastructure errors.
    pub fn from_store_error(err: anyhow::Error) -> Self {
        match err.downcast::<PolicyViolation>() {
            Ok(violation) => Self::PolicyViolation(violation),
            Err(err) => Self::Store(err),
        }
    }
}

impl From<PasswordChangeError> for SecutilsError {
    fn from(err: PasswordChangeError) -> Self {
        match err {
            PasswordChangeError::Forbidden => SecutilsError::access_forbidden(),
            PasswordChangeError::InvalidExistingCredential => {
                SecutilsError::client(INVALID_PASSWORD_EXISTING)
            }
            PasswordChangeError::PasswordConfirmationMismatch => {
                SecutilsError::client(NOT_MATCH_PASSWORD)
            }
            PasswordChangeError::PolicyViolation(violation) => {
                SecutilsError::client_with_params(violation.message, violation.parameters)
            }
            PasswordChangeError::Store(err) => SecutilsError::from(err),
        }
    }
}
