use crate::config::Config;
use crate::error::PullError;
use crate::types::offers::{OfferRecord, offers_from_slice};
use std::time::Duration;
use tracing::info;
use url::Url;

pub struct OffersApi;

impl OffersApi {
    /// Build the HTTP client used for the catalog fetch.
    pub fn client(cfg: &Config) -> reqwest::Client {
        let mut builder = reqwest::Client::builder()
            .user_agent("offerpull/0.1".to_string())
            .connect_timeout(Duration::from_secs(cfg.http_connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.http_timeout_secs));
        if let Some(proxy_url) = cfg.proxy.clone() {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .expect("invalid PROXY url for reqwest client");
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .expect("FATAL: initialize offers HTTP client failed")
    }

    /// One GET for the complete catalog. No retry, no pagination: a transport
    /// error, a non-2xx status, or a malformed body aborts the run.
    pub async fn fetch_offers(
        client: &reqwest::Client,
        endpoint: &Url,
    ) -> Result<Vec<OfferRecord>, PullError> {
        let resp = client.get(endpoint.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(PullError::UpstreamStatus(resp.status()));
        }
        let body = resp.bytes().await?;
        let offers = offers_from_slice(&body)?;
        info!(count = offers.len(), "fetched offer catalog");
        Ok(offers)
    }
}
