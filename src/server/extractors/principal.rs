use crate::{security::Principal, server::app_state::AppState};
use actix_web::{
    Error, FromRequest, HttpRequest,
    dev::Payload,
    error::{ErrorInternalServerError, ErrorUnauthorized},
    web,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use anyhow::anyhow;
use std::{future::Future, pin::Pin};
use tracing::error;

impl FromRequest for Principal {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = web::Data::<AppState>::extract(&req).await?;

            let Some(bearer_auth) = Option::<BearerAuth>::extract(&req).await? else {
                return Err(ErrorUnauthorized(anyhow!("Unauthorized")));
            };

            match state.api.security().authenticate(bearer_auth.token()) {
                Ok(Some(principal)) => Ok(principal),
                Ok(None) => Err(ErrorUnauthorized(anyhow!("Unauthorized"))),
                Err(err) => {
                    error!("Failed to extract principal information due to: {err:?}");
                    Err(ErrorInternalServerError(anyhow!("Internal server error")))
                }
            }
        })
    }
}
