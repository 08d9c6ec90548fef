//! REST client for the public breed/image API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call reports `FetchError::Unavailable`, which keeps
//! the crate testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers always get a `Result`; transport, status, and payload problems are
//! folded into `FetchError` so the controller can turn them into state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
#[cfg(test)]
#[path = "fake_api_test.rs"]
pub(crate) mod fake;

use std::future::Future;

use serde::de::DeserializeOwned;

use super::types::{CatalogResponse, FetchError, ImageResponse};
use crate::config::GalleryConfig;

/// Source of breed names and random breed images.
pub trait BreedApi {
    /// Fetch every breed name, in the order the service lists them.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<String>, FetchError>>;

    /// Fetch one random image URL for `breed`.
    fn fetch_random_image(&self, breed: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// `BreedApi` backed by dog.ceo (or whatever `api_base_url` names).
#[derive(Clone, Debug, Default)]
pub struct DogApiClient {
    config: GalleryConfig,
}

impl DogApiClient {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| FetchError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Status(resp.status()));
            }
            resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(FetchError::Unavailable)
        }
    }
}

impl BreedApi for DogApiClient {
    async fn fetch_catalog(&self) -> Result<Vec<String>, FetchError> {
        let body: CatalogResponse = self.get_json(&self.config.catalog_url()).await?;
        body.into_breed_names()
    }

    async fn fetch_random_image(&self, breed: &str) -> Result<String, FetchError> {
        let body: ImageResponse = self.get_json(&self.config.random_image_url(breed)).await?;
        body.into_image_url()
    }
}
