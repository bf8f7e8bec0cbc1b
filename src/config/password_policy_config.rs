use serde_derive::{Deserialize, Serialize};

/// Describes the rules every new password must satisfy before it's persisted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    /// Minimum number of characters. Default is 8.
    pub min_length: usize,
    /// Maximum number of characters. Default is 64.
    pub max_length: usize,
    /// Minimum number of ASCII digits. Default is 0 (not enforced).
    pub min_digits: usize,
    /// Minimum number of upper case characters. Default is 0 (not enforced).
    pub min_upper_case: usize,
    /// Minimum number of special (non-alphanumeric) characters. Default is 0 (not enforced).
    pub min_special_chars: usize,
    /// Defines whether the new password must differ from the current one. Default is true.
    pub not_current: bool,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
            min_digits: 0,
            min_upper_case: 0,
            min_special_chars: 0,
            not_current: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PasswordPolicyConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(PasswordPolicyConfig::default(), @r###"
        min_length = 8
        max_length = 64
        min_digits = 0
        min_upper_case = 0
        min_special_chars = 0
        not_current = true
        "###);
    }

    #[test]
    fn deserialization() {
        let config: PasswordPolicyConfig = toml::from_str(
            r#"
        min_length = 12
        min_digits = 2
        not_current = false
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            PasswordPolicyConfig {
                min_length: 12,
                min_digits: 2,
                not_current: false,
                ..Default::default()
            }
        );
    }
}
