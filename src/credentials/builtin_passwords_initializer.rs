use crate::{
    api::Api,
    credentials::{BuiltinPassword, CredentialInput},
};
use tracing::info;

pub async fn builtin_passwords_initializer<BP: AsRef<str>>(
    api: &Api,
    builtin_passwords: BP,
) -> anyhow::Result<()> {
    info!("Initializing builtin passwords.");
    let store = api.credential_store();

    let mut initialized_builtin_passwords = 0;
    for builtin_password_str in builtin_passwords.as_ref().split('|') {
        let builtin_password = BuiltinPassword::try_from(builtin_password_str)?;
        if store
            .get_password(&builtin_password.realm, builtin_password.user_id)
            .await?
            .is_some()
        {
            info!(
                realm = %builtin_password.realm,
                user.id = %builtin_password.user_id,
                "User already has a password, skipping builtin password."
            );
            continue;
        }

        store
            .update_credential(
                &builtin_password.realm,
                builtin_password.user_id,
                &CredentialInput::password(builtin_password.password),
            )
            .await?;
        initialized_builtin_passwords += 1;
    }

    info!("Successfully initialized {initialized_builtin_passwords} builtin passwords.");

    Ok(())
}
