mod api;
mod audit;
mod config;
mod credentials;
mod database;
mod error;
mod security;
mod server;
mod users;

use crate::config::{Config, RawConfig};
use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version, value_parser};
use std::env;
use tracing::info;

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = Command::new("Secutils.dev account credentials API server")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("SECUTILS_ACCOUNT_CONFIG")
                .short('c')
                .long("config")
                .default_value("account.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("PORT")
                .env("SECUTILS_ACCOUNT_PORT")
                .short('p')
                .long("port")
                .value_parser(value_parser!(u16))
                .help("Defines a TCP port to listen on."),
        )
        .get_matches();

    let mut raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    // CLI argument takes precedence.
    if let Some(port) = matches.get_one::<u16>("PORT") {
        raw_config.port = *port;
    }

    info!(
        http.port = raw_config.port,
        db.path = %raw_config.db.path,
        "Account credentials server configuration is loaded."
    );

    server::run(Config::from(raw_config))
}
