mod api_ext;
mod builtin_password;
mod builtin_passwords_initializer;
mod credential_catalog;
mod credential_container;
mod credential_input;
mod credential_providers;
mod credential_record;
mod credential_store;
mod credential_type;
mod database_ext;
mod password_change_error;
mod password_change_request;
mod password_credential_provider;
mod password_details;
mod password_policy;
mod policy_violation;

pub use self::{
    builtin_password::BuiltinPassword,
    builtin_passwords_initializer::builtin_passwords_initializer,
    credential_catalog::group_into_containers,
    credential_container::CredentialContainer,
    credential_input::CredentialInput,
    credential_providers::{CredentialProvider, CredentialProviders},
    credential_record::CredentialRecord,
    credential_store::CredentialStore,
    credential_type::CredentialType,
    password_change_error::PasswordChangeError,
    password_change_request::PasswordChangeRequest,
    password_credential_provider::PasswordCredentialProvider,
    password_details::PasswordDetails,
    password_policy::PasswordPolicy,
    policy_violation::PolicyViolation,
};
