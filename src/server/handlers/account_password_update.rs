use crate::{
    credentials::PasswordChangeRequest, error::Error as SecutilsError, security::Principal,
    server::app_state::AppState,
};
use actix_web::{HttpResponse, web};
use serde_derive::Deserialize;

#[derive(Deserialize)]
pub struct PathParams {
    pub realm: String,
}

/// POST /api/realms/{realm}/account/credentials/password
pub async fn account_password_update(
    state: web::Data<AppState>,
    path_params: web::Path<PathParams>,
    principal: Principal,
    body_params: web::Json<PasswordChangeRequest>,
) -> Result<HttpResponse, SecutilsError> {
    principal.require_realm(&path_params.realm)?;

    state
        .api
        .credentials(&principal)
        .change_password(&body_params)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
