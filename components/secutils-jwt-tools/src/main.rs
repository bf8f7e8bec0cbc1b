use clap::{Parser, ValueEnum};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_derive::Serialize;
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

/// Issues access tokens accepted by the account credentials API.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Secret key the API is configured with (`security.jwt_secret`).
    #[arg(short, long, env = "SECUTILS_ACCOUNT_SECURITY__JWT_SECRET")]
    secret: String,
    /// ID of the account owner.
    #[arg(long)]
    user_id: Uuid,
    #[arg(long, default_value = "master")]
    realm: String,
    /// Account roles, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "manage-account")]
    roles: Vec<AccountRole>,
    /// Token lifetime, e.g. `15m` or `1day`.
    #[arg(long, default_value = "1h", value_parser = humantime::parse_duration)]
    ttl: Duration,
}

#[derive(ValueEnum, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum AccountRole {
    ManageAccount,
    ViewProfile,
}

#[derive(Serialize, Debug)]
struct AccessTokenClaims<'a> {
    sub: Uuid,
    realm: &'a str,
    roles: &'a [AccountRole],
    exp: i64,
}

impl Cli {
    fn claims(&self, now: OffsetDateTime) -> AccessTokenClaims<'_> {
        AccessTokenClaims {
            sub: self.user_id,
            realm: &self.realm,
            roles: &self.roles,
            exp: (now + self.ttl).unix_timestamp(),
        }
    }

    fn access_token(&self, now: OffsetDateTime) -> anyhow::Result<String> {
        Ok(encode(
            &Header::default(),
            &self.claims(now),
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!(
        "Issuing token for {} in realm `{}` with roles {:?}, valid for {}.",
        cli.user_id,
        cli.realm,
        cli.roles,
        humantime::format_duration(cli.ttl)
    );
    println!("{}", cli.access_token(OffsetDateTime::now_utc())?);

    Ok(())
}
