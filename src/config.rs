// src/config.rs
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    site_url: Url,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://rt_celebs.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "http://localhost:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Every key has a
    /// default; `SITE_URL` must be an absolute http(s) URL when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let site_url = env::var("SITE_URL").unwrap_or_else(|_| default_site_url());

        Ok(Self {
            database_url,
            listen_addr,
            site_url: parse_site_url(&site_url)?,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Public base URL of the hosting site; permalinks and the CORS origin
    /// derive from it.
    pub fn site_url(&self) -> &Url {
        &self.site_url
    }
}

pub fn parse_site_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ConfigError::Invalid(format!("SITE_URL {raw:?}: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "SITE_URL must use http or https, got {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::Invalid("SITE_URL must include a host".into()));
    }

    Ok(url)
}
