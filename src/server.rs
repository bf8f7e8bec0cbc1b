mod app_state;
mod extractors;
mod handlers;

use crate::{
    api::Api, config::Config, credentials::builtin_passwords_initializer, database::Database,
    server::app_state::AppState,
};
use actix_web::{App, HttpServer, Result, middleware, web};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Registers account credentials routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/realms/{realm}/account/credentials")
            .route("", web::get().to(handlers::account_credentials_list))
            .route("/password", web::get().to(handlers::account_password_get))
            .route(
                "/password",
                web::post().to(handlers::account_password_update),
            )
            .route(
                "/{credential_id}",
                web::delete().to(handlers::account_credentials_remove),
            ),
    );
}

#[actix_web::main]
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let db_path = config.db.path.clone();
    let db = Database::open(|| Ok(db_path)).await?;
    let api = Api::new(config.clone(), db);

    if let Some(ref builtin_passwords) = config.security.builtin_passwords {
        builtin_passwords_initializer(&api, builtin_passwords)
            .await
            .with_context(|| "Cannot initialize builtin passwords")?;
    }

    let http_server_url = format!("0.0.0.0:{}", config.http_port);
    let state = web::Data::new(AppState::new(api));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!(
        version = %config.version,
        "Account credentials API server is available at http://{http_server_url}"
    );

    http_server
        .run()
        .await
        .with_context(|| "Failed to run account credentials API server.")
}

#[cfg(test)]
pub mod tests {
    use crate::{
        server::AppState,
        tests::mock_api,
    };
    use actix_web::web;

    pub async fn mock_app_state() -> anyhow::Result<web::Data<AppState>> {
        Ok(web::Data::new(AppState::new(mock_api().await?)))
    }
}
