// client.rs
use crate::api::FetchError;
use crate::config::{ApiConfig, ConfigError};
use crate::domain::{Listing, ListingsEnvelope};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("listing_site/", env!("CARGO_PKG_VERSION"));

// {base}/api/apartments/app/get[/{id}]
const LISTINGS_PATH: [&str; 4] = ["api", "apartments", "app", "get"];

/// Read-only client for the agency's listings API.
///
/// Every call issues exactly one uncached GET and never retries.
pub struct ListingsApi {
    client: Client,
    base_url: Url,
}

impl ListingsApi {
    pub fn new(cfg: &ApiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Catalog: `GET {base}/api/apartments/app/get` → `{ apartments: [...] }`.
    ///
    /// Any non-2xx status, including 404, is a `LoadFailed`.
    pub fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        let url = self.endpoint(None);
        let resp = self.get(&url)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(FetchError::LoadFailed(status.as_u16()));
        }

        let envelope: ListingsEnvelope = decode(resp, &url)?;
        debug!(%url, count = envelope.apartments.len(), "catalog loaded");
        Ok(envelope.apartments)
    }

    /// Detail: `GET {base}/api/apartments/app/get/{id}` → `Listing`.
    pub fn fetch_listing(&self, id: &str) -> Result<Listing, FetchError> {
        let url = self.endpoint(Some(id));
        let resp = self.get(&url)?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "listing not found");
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "listing request failed");
            return Err(FetchError::LoadFailed(status.as_u16()));
        }

        decode(resp, &url)
    }

    fn get(&self, url: &Url) -> Result<Response, FetchError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .map_err(|e| {
                warn!(%url, error = %e, "listings API unreachable");
                FetchError::ConnectionFailed
            })?;

        debug!(%url, status = resp.status().as_u16(), elapsed = ?start.elapsed(), "upstream responded");
        Ok(resp)
    }

    fn endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are checked for `cannot_be_a_base` when the config is built.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(LISTINGS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

// A 2xx body that does not decode counts as no usable response.
fn decode<T: DeserializeOwned>(resp: Response, url: &Url) -> Result<T, FetchError> {
    resp.json::<T>().map_err(|e| {
        warn!(%url, error = %e, "unreadable listings payload");
        FetchError::ConnectionFailed
    })
}
