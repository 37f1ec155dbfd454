//! Catalog Client
//!
//! Cache-first HTTP access to the remote location/creature catalog.

use bytes::Bytes;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::{Creature, LocationArea, LocationAreaPage};

/// HTTP client for the catalog.
///
/// Every successful response body is memoized in the [`Cache`] under its full
/// URL, so revisiting a page within the cache interval costs no round trip.
#[derive(Debug)]
pub struct PokeClient {
    /// The underlying HTTP client.
    http: Client,
    /// Catalog base URL, without a trailing slash.
    base_url: String,
    cache: Cache,
}

impl PokeClient {
    /// Creates a client over an existing cache.
    pub fn new(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    /// Builds the HTTP client and cache described by `config`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;
        let cache = Cache::new(config.cache_interval())?;
        Ok(Self::new(http, config.api_url.clone(), cache))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the raw body at `url`, from the cache when possible.
    ///
    /// Only 2xx bodies are cached; error statuses are returned as
    /// [`ClientError::Status`] and will be retried on the next call.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "Serving from cache");
            return Ok(body);
        }

        info!(url, "Fetching from catalog");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.put(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// First page of location areas.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Loads a page of location areas; `None` loads the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.first_page_url()).await,
        }
    }

    /// URL of `{base}/{collection}/{name}`.
    ///
    /// `name` always becomes exactly one path segment; `/`, `%` and other
    /// reserved characters in it are percent-encoded.
    pub fn resource_url(&self, collection: &str, name: &str) -> Result<String> {
        let invalid = || ClientError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(collection)
            .push(name);
        Ok(url.into())
    }

    /// Loads one location area with its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.resource_url("location-area", name)?;
        self.fetch_json(&url).await
    }

    /// Loads one creature.
    pub async fn creature(&self, name: &str) -> Result<Creature> {
        let url = self.resource_url("pokemon", name)?;
        self.fetch_json(&url).await
    }

    // == Close ==
    /// Stops the cache reaper.
    pub async fn close(&self) {
        self.cache.close().await;
    }
}
