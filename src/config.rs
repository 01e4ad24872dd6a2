use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

/// Endpoint serving the complete offer catalog in one GET.
pub const DEFAULT_OFFERS_ENDPOINT: &str = "https://www.kattabozor.uz/hh/test/api/v1/offers";

/// Snapshot file written next to the working directory, wiped on every run.
pub const DEFAULT_DATABASE_PATH: &str = "sqlite.db";

/// Runtime configuration. Defaults reproduce the fixed fetch-and-populate
/// pipeline; every field can be overridden through `OFFERPULL_*` env vars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Url,
    pub database_path: PathBuf,
    pub loglevel: String,
    pub http_timeout_secs: u64,
    pub http_connect_timeout_secs: u64,
    /// Optional outbound proxy for the catalog fetch.
    pub proxy: Option<Url>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_OFFERS_ENDPOINT).expect("default endpoint URL is valid"),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            loglevel: "info".to_string(),
            http_timeout_secs: 30,
            http_connect_timeout_secs: 5,
            proxy: None,
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::prefixed("OFFERPULL_"))
        .extract()
        .expect("FATAL: invalid OFFERPULL_* environment configuration")
});
