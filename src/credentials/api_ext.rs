use crate::{
    api::Api,
    audit::{AuditEventType, INVALID_USER_CREDENTIALS},
    credentials::{
        CredentialContainer, CredentialInput, CredentialRecord, PasswordChangeError,
        PasswordChangeRequest, PasswordDetails, group_into_containers,
    },
    error::Error as SecutilsError,
    security::{Capability, Principal},
};
use tracing::{error, info};
use uuid::Uuid;

/// Capabilities that allow to read account credentials.
const READ_CAPABILITIES: [Capability; 2] = [Capability::ManageAccount, Capability::ViewProfile];

/// Credentials management on behalf of the authenticated principal.
pub struct CredentialsApiExt<'a, 'p> {
    api: &'a Api,
    principal: &'p Principal,
}

impl<'a, 'p> CredentialsApiExt<'a, 'p> {
    pub fn new(api: &'a Api, principal: &'p Principal) -> Self {
        Self { api, principal }
    }

    /// Returns credentials of the principal grouped into the containers of the known credential
    /// types. Secrets are never included.
    pub async fn list_credential_containers(
        &self,
    ) -> Result<Vec<CredentialContainer>, SecutilsError> {
        self.principal.require_one_of(&READ_CAPABILITIES)?;

        let credentials = self.get_stored_credentials().await?;
        Ok(group_into_containers(&credentials))
    }

    /// Returns all credentials of the principal, ordered by creation date.
    pub async fn get_stored_credentials(&self) -> anyhow::Result<Vec<CredentialRecord>> {
        self.api
            .credential_store()
            .get_stored_credentials(&self.principal.realm, self.principal.user_id)
            .await
    }

    /// Removes credential of the principal.
    pub async fn remove_credential(&self, credential_id: Uuid) -> Result<(), SecutilsError> {
        self.principal.require(Capability::ManageAccount)?;

        let removed = self
            .api
            .credential_store()
            .remove_stored_credential(
                &self.principal.realm,
                self.principal.user_id,
                credential_id,
            )
            .await?;
        if !removed {
            return Err(SecutilsError::not_found("Credential not found."));
        }

        info!(
            realm = %self.principal.realm,
            user.id = %self.principal.user_id,
            credential.id = %credential_id,
            "Removed user credential."
        );

        self.api
            .audit_event(
                &self.principal.realm,
                self.principal.user_id,
                AuditEventType::RemoveCredential,
            )
            .success()
            .await;

        Ok(())
    }

    /// Returns details of the password currently in effect.
    pub async fn password_details(&self) -> Result<PasswordDetails, SecutilsError> {
        self.principal.require_one_of(&READ_CAPABILITIES)?;

        let password = self
            .api
            .credential_store()
            .get_password(&self.principal.realm, self.principal.user_id)
            .await?;
        Ok(PasswordDetails::from(password.as_ref()))
    }

    /// Changes password of the principal after verifying the current one. Every attempt by an
    /// authorized principal is recorded in the audit trail.
    pub async fn change_password(
        &self,
        request: &PasswordChangeRequest,
    ) -> Result<(), PasswordChangeError> {
        if self.principal.require(Capability::ManageAccount).is_err() {
            return Err(PasswordChangeError::Forbidden);
        }

        let audit_event = self.api.audit_event(
            &self.principal.realm,
            self.principal.user_id,
            AuditEventType::UpdatePassword,
        );

        let store = self.api.credential_store();
        let is_current_valid = store
            .is_valid(
                &self.principal.realm,
                self.principal.user_id,
                &CredentialInput::password(request.current_password.as_str()),
            )
            .await?;
        if !is_current_valid {
            audit_event.error(INVALID_USER_CREDENTIALS).await;
            return Err(PasswordChangeError::InvalidExistingCredential);
        }

        let new_password = match request.new_password.as_deref() {
            Some(new_password) if !new_password.is_empty() => new_password,
            _ => return Err(PasswordChangeError::InvalidExistingCredential),
        };

        if request
            .confirmation
            .as_deref()
            .is_some_and(|confirmation| confirmation != new_password)
        {
            return Err(PasswordChangeError::PasswordConfirmationMismatch);
        }

        if let Err(err) = store
            .update_credential(
                &self.principal.realm,
                self.principal.user_id,
                &CredentialInput::password(new_password),
            )
            .await
        {
            let err = PasswordChangeError::from_store_error(err);
            if let PasswordChangeError::Store(ref err) = err {
                error!(
                    realm = %self.principal.realm,
                    user.id = %self.principal.user_id,
                    "Failed to update user password: {err:?}"
                );
            }
            return Err(err);
        }

        audit_event.success().await;

        Ok(())
    }
}

impl Api {
    /// Returns an API to manage credentials of the specified principal.
    pub fn credentials<'a, 'p>(&'a self, principal: &'p Principal) -> CredentialsApiExt<'a, 'p> {
        CredentialsApiExt::new(self, principal)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        audit::{AuditEventType, INVALID_USER_CREDENTIALS},
        credentials::{
            CredentialInput, CredentialType, PasswordChangeError, PasswordChangeRequest,
            PasswordDetails, PolicyViolation,
        },
        error::ErrorKind,
        security::Capability,
        tests::{MockCredentialBuilder, mock_api, mock_principal, mock_user_id},
        users::RealmName,
    };
    use insta::assert_json_snapshot;
    use uuid::Uuid;

    fn change_request(
        current: &str,
        new: Option<&str>,
        confirmation: Option<&str>,
    ) -> PasswordChangeRequest {
        PasswordChangeRequest {
            current_password: current.to_string(),
            new_password: new.map(str::to_string),
            confirmation: confirmation.map(str::to_string),
        }
    }

    async fn audit_trail(
        api: &crate::api::Api,
    ) -> anyhow::Result<Vec<(AuditEventType, Option<String>)>> {
        Ok(api
            .db
            .get_audit_events(&RealmName::try_from("master")?, mock_user_id())
            .await?
            .into_iter()
            .map(|event| (event.event_type, event.error))
            .collect())
    }

    #[tokio::test]
    async fn lists_credential_containers() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ViewProfile])?;

        api.credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;
        api.db
            .insert_credential(
                &MockCredentialBuilder::new(Uuid::from_u128(1), CredentialType::Otp, 1000)?
                    .set_user_label("Phone")
                    .set_secret_data("JBSWY3DPEHPK3PXP")
                    .build(),
            )
            .await?;

        let containers = api.credentials(&principal).list_credential_containers().await?;
        assert_eq!(
            containers
                .iter()
                .map(|container| (
                    container.credential_type.as_str(),
                    container.user_credentials.len()
                ))
                .collect::<Vec<_>>(),
            vec![
                ("password", 1),
                ("otp", 1),
                ("webauthn", 0),
                ("webauthn-passwordless", 0)
            ]
        );
        assert!(
            containers
                .iter()
                .flat_map(|container| container.user_credentials.iter())
                .all(|credential| credential.secret_data.is_none())
        );
        assert_json_snapshot!(containers[1].user_credentials, @r###"
        [
          {
            "id": "00000000-0000-0000-0000-000000000001",
            "type": "otp",
            "createdDate": 1000,
            "userLabel": "Phone"
          }
        ]
        "###);

        Ok(())
    }

    #[tokio::test]
    async fn lists_empty_containers_for_user_without_credentials() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let containers = api.credentials(&principal).list_credential_containers().await?;
        assert_eq!(containers.len(), 4);
        assert!(
            containers
                .iter()
                .all(|container| container.user_credentials.is_empty())
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_read_without_capabilities() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[])?;

        let err = api
            .credentials(&principal)
            .list_credential_containers()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessForbidden);

        let err = api.credentials(&principal).password_details().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessForbidden);

        Ok(())
    }

    #[tokio::test]
    async fn returns_password_details() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ViewProfile])?;

        assert_eq!(
            api.credentials(&principal).password_details().await?,
            PasswordDetails {
                registered: false,
                last_update: 0
            }
        );

        let password = api
            .credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;
        assert_eq!(
            api.credentials(&principal).password_details().await?,
            PasswordDetails {
                registered: true,
                last_update: (password.created_date.unix_timestamp_nanos() / 1_000_000) as i64
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn removes_credentials() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let otp = MockCredentialBuilder::new(Uuid::from_u128(1), CredentialType::Otp, 1000)?
            .set_secret_data("JBSWY3DPEHPK3PXP")
            .build();
        api.db.insert_credential(&otp).await?;

        api.credentials(&principal).remove_credential(otp.id).await?;
        assert!(
            api.credentials(&principal)
                .get_stored_credentials()
                .await?
                .is_empty()
        );
        assert_eq!(
            audit_trail(&api).await?,
            vec![(AuditEventType::RemoveCredential, None)]
        );

        let err = api
            .credentials(&principal)
            .remove_credential(otp.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_remove_without_manage_capability() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ViewProfile])?;

        let otp =
            MockCredentialBuilder::new(Uuid::from_u128(1), CredentialType::Otp, 1000)?.build();
        api.db.insert_credential(&otp).await?;

        let err = api
            .credentials(&principal)
            .remove_credential(otp.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessForbidden);
        assert_eq!(
            api.credentials(&principal).get_stored_credentials().await?,
            vec![otp]
        );
        assert!(audit_trail(&api).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn does_not_remove_credentials_of_other_users() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let otp = MockCredentialBuilder::new(Uuid::from_u128(1), CredentialType::Otp, 1000)?
            .set_user_id(Uuid::from_u128(2).into())
            .build();
        api.db.insert_credential(&otp).await?;

        let err = api
            .credentials(&principal)
            .remove_credential(otp.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            api.db
                .get_credentials(&RealmName::try_from("master")?, Uuid::from_u128(2).into())
                .await?,
            vec![otp]
        );

        Ok(())
    }

    #[tokio::test]
    async fn changes_password() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;
        let store = api.credential_store();

        let old_password = store
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        api.credentials(&principal)
            .change_password(&change_request(
                "password123",
                Some("password456"),
                Some("password456"),
            ))
            .await?;

        let new_password = store
            .get_password(&principal.realm, principal.user_id)
            .await?
            .unwrap();
        assert_ne!(new_password.id, old_password.id);
        assert!(new_password.created_date >= old_password.created_date);
        assert!(
            store
                .is_valid(
                    &principal.realm,
                    principal.user_id,
                    &CredentialInput::password("password456")
                )
                .await?
        );
        assert!(
            !store
                .is_valid(
                    &principal.realm,
                    principal.user_id,
                    &CredentialInput::password("password123")
                )
                .await?
        );
        assert_eq!(
            audit_trail(&api).await?,
            vec![(AuditEventType::UpdatePassword, None)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_without_manage_capability() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ViewProfile])?;

        api.credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request(
                "password123",
                Some("password456"),
                Some("password456"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordChangeError::Forbidden));
        assert!(audit_trail(&api).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_if_current_is_wrong() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let password = api
            .credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request(
                "wrong-password",
                Some("password456"),
                Some("password456"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordChangeError::InvalidExistingCredential));
        assert_eq!(
            api.credential_store()
                .get_password(&principal.realm, principal.user_id)
                .await?,
            Some(password)
        );
        assert_eq!(
            audit_trail(&api).await?,
            vec![(
                AuditEventType::UpdatePassword,
                Some(INVALID_USER_CREDENTIALS.to_string())
            )]
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_if_user_has_no_password() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request("", Some("password456"), Some("password456")))
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordChangeError::InvalidExistingCredential));
        assert!(
            api.credential_store()
                .get_password(&principal.realm, principal.user_id)
                .await?
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_if_new_password_is_missing() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let password = api
            .credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        for request in [
            change_request("password123", None, None),
            change_request("password123", Some(""), Some("")),
        ] {
            let err = api
                .credentials(&principal)
                .change_password(&request)
                .await
                .unwrap_err();
            assert!(matches!(err, PasswordChangeError::InvalidExistingCredential));
        }

        assert_eq!(
            api.credential_store()
                .get_password(&principal.realm, principal.user_id)
                .await?,
            Some(password)
        );
        assert!(audit_trail(&api).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_if_confirmation_does_not_match() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let password = api
            .credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request(
                "password123",
                Some("password456"),
                Some("password789"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordChangeError::PasswordConfirmationMismatch));

        assert_eq!(
            api.credential_store()
                .get_password(&principal.realm, principal.user_id)
                .await?,
            Some(password)
        );

        Ok(())
    }

    #[tokio::test]
    async fn changes_password_without_confirmation() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;
        let store = api.credential_store();

        store
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        api.credentials(&principal)
            .change_password(&change_request("password123", Some("password456"), None))
            .await?;

        assert!(
            store
                .is_valid(
                    &principal.realm,
                    principal.user_id,
                    &CredentialInput::password("password456")
                )
                .await?
        );
        assert_eq!(
            audit_trail(&api).await?,
            vec![(AuditEventType::UpdatePassword, None)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn completes_operations_if_audit_trail_is_unavailable() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;
        let store = api.credential_store();

        store
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;
        let otp =
            MockCredentialBuilder::new(Uuid::from_u128(1), CredentialType::Otp, 1000)?.build();
        api.db.insert_credential(&otp).await?;

        sqlx::query("DROP TABLE audit_events")
            .execute(&api.db.pool)
            .await?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request(
                "wrong-password",
                Some("password456"),
                Some("password456"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, PasswordChangeError::InvalidExistingCredential));

        api.credentials(&principal)
            .change_password(&change_request(
                "password123",
                Some("password456"),
                Some("password456"),
            ))
            .await?;
        assert!(
            store
                .is_valid(
                    &principal.realm,
                    principal.user_id,
                    &CredentialInput::password("password456")
                )
                .await?
        );

        api.credentials(&principal).remove_credential(otp.id).await?;
        assert!(
            api.credentials(&principal)
                .get_stored_credentials()
                .await?
                .iter()
                .all(|credential| credential.id != otp.id)
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_to_change_password_if_policy_is_violated() -> anyhow::Result<()> {
        let api = mock_api().await?;
        let principal = mock_principal(&[Capability::ManageAccount])?;

        let password = api
            .credential_store()
            .update_credential(
                &principal.realm,
                principal.user_id,
                &CredentialInput::password("password123"),
            )
            .await?;

        let err = api
            .credentials(&principal)
            .change_password(&change_request("password123", Some("short"), Some("short")))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PasswordChangeError::PolicyViolation(ref violation)
                if violation == &PolicyViolation::new(
                    "invalidPasswordMinLengthMessage",
                    vec!["8".to_string()]
                )
        ));

        let err = api
            .credentials(&principal)
            .change_password(&change_request(
                "password123",
                Some("password123"),
                Some("password123"),
            ))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PasswordChangeError::PolicyViolation(ref violation)
                if violation.message == "invalidPasswordHistoryMessage"
        ));

        assert_eq!(
            api.credential_store()
                .get_password(&principal.realm, principal.user_id)
                .await?,
            Some(password)
        );
        assert!(audit_trail(&api).await?.is_empty());

        Ok(())
    }
}
