//! allocation_client.rs
//!
//! Client for the upstream allocations endpoint. One GET, no retry, no timeout:
//! a failed fetch is reported to the caller and nothing else happens.

use thiserror::Error;
use tracing::info;

use crate::{config::UpstreamConfig, models::Allocation};

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success status from the allocations endpoint.
    #[error("allocations request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The body was not a JSON array of allocations.
    #[error("allocations response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct AllocationClient {
    allocations_url: String,
    http_client: reqwest::Client,
}

impl AllocationClient {
    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.allocations_url.clone(), reqwest::Client::new())
    }

    pub fn new(allocations_url: String, http_client: reqwest::Client) -> Self {
        Self { allocations_url, http_client }
    }

    pub fn allocations_url(&self) -> &str {
        &self.allocations_url
    }

    pub async fn fetch_allocations(&self) -> Result<Vec<Allocation>, FetchError> {
        let response = self
            .http_client
            .get(&self.allocations_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Request)?;

        let allocations: Vec<Allocation> = response.json().await.map_err(FetchError::Decode)?;
        info!("Fetched {} allocations from {}", allocations.len(), self.allocations_url);
        Ok(allocations)
    }
}
