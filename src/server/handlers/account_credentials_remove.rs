use crate::{error::Error as SecutilsError, security::Principal, server::app_state::AppState};
use actix_web::{HttpResponse, web};
use serde_derive::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct PathParams {
    pub realm: String,
    pub credential_id: String,
}

/// DELETE /api/realms/{realm}/account/credentials/{credential_id}
pub async fn account_credentials_remove(
    state: web::Data<AppState>,
    path_params: web::Path<PathParams>,
    principal: Principal,
) -> Result<HttpResponse, SecutilsError> {
    principal.require_realm(&path_params.realm)?;

    // Credential with malformed ID cannot exist.
    let Ok(credential_id) = Uuid::parse_str(&path_params.credential_id) else {
        return Err(SecutilsError::not_found("Credential not found."));
    };

    state
        .api
        .credentials(&principal)
        .remove_credential(credential_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
