use crate::{error::Error as SecutilsError, security::Principal, server::app_state::AppState};
use actix_web::{HttpResponse, web};
use serde_derive::Deserialize;

#[derive(Deserialize)]
pub struct PathParams {
    pub realm: String,
}

/// GET /api/realms/{realm}/account/credentials
pub async fn account_credentials_list(
    state: web::Data<AppState>,
    path_params: web::Path<PathParams>,
    principal: Principal,
) -> Result<HttpResponse, SecutilsError> {
    principal.require_realm(&path_params.realm)?;

    let containers = state
        .api
        .credentials(&principal)
        .list_credential_containers()
        .await?;
    Ok(HttpResponse::Ok().json(containers))
}
