use crate::{config::PasswordPolicyConfig, credentials::PolicyViolation};

/// Validates new passwords against the configured rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    config: PasswordPolicyConfig,
}

impl PasswordPolicy {
    pub fn new(config: PasswordPolicyConfig) -> Self {
        Self { config }
    }

    /// Defines whether the new password must differ from the current one.
    pub fn requires_new_password(&self) -> bool {
        self.config.not_current
    }

    /// Checks the password against every configured rule and reports the first violated one.
    pub fn validate(&self, password: &str) -> Result<(), PolicyViolation> {
        let length = password.chars().count();
        if length < self.config.min_length {
            return Err(violation(
                "invalidPasswordMinLengthMessage",
                self.config.min_length,
            ));
        }

        if length > self.config.max_length {
            return Err(violation(
                "invalidPasswordMaxLengthMessage",
                self.config.max_length,
            ));
        }

        let digits = password.chars().filter(char::is_ascii_digit).count();
        if digits < self.config.min_digits {
            return Err(violation(
                "invalidPasswordMinDigitsMessage",
                self.config.min_digits,
            ));
        }

        let upper_case = password.chars().filter(|c| c.is_uppercase()).count();
        if upper_case < self.config.min_upper_case {
            return Err(violation(
                "invalidPasswordMinUpperCaseCharsMessage",
                self.config.min_upper_case,
            ));
        }

        let special = password
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count();
        if special < self.config.min_special_chars {
            return Err(violation(
                "invalidPasswordMinSpecialCharsMessage",
                self.config.min_special_chars,
            ));
        }

        Ok(())
    }

    /// Violation reported when the new password matches the current one.
    pub fn reused_password_violation() -> PolicyViolation {
        violation("invalidPasswordHistoryMessage", 1)
    }
}

fn violation(message: &str, parameter: usize) -> PolicyViolation {
    PolicyViolation::new(message, vec![parameter.to_string()])
}
