use std::env;

use anyhow::Context;

const DEFAULT_PAGINATOR_LIMIT: i64 = 10;
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Page size used when a list request asks for `limit=0`
    pub paginator_limit_default: i64,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let paginator_limit_default = match env::var("PAGINATOR_LIMIT_DEFAULT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PAGINATOR_LIMIT_DEFAULT is not a number: {raw}"))?,
            Err(_) => DEFAULT_PAGINATOR_LIMIT,
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            paginator_limit_default,
            port,
        })
    }
}
