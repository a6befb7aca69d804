//! Remote model listing over the OpenAI-compatible API.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

use self::http::{shared_client, status_to_error};

/// A model entry exactly as reported by a source's listing API.
///
/// `id` is opaque and source-defined; local servers typically report
/// filesystem-like names such as `ggml-gpt4all-j.bin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModel {
    pub id: String,
    /// The literal `"model"` on conforming servers.
    pub object: String,
}

/// Listing envelope returned by `GET /v1/models`.
#[derive(Debug, Deserialize)]
struct ModelListResponse {
    data: Vec<RawModel>,
}

/// Fetches the raw model listing from a source.
#[async_trait]
pub trait ModelListing: Send + Sync {
    /// List the models a source reports, in the order the source returns them.
    async fn list_models(&self, base_url: &str) -> Result<Vec<RawModel>>;
}

/// Production listing client for OpenAI-compatible sources (LocalAI,
/// LMStudio, Ollama's compat endpoint).
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpModelListing;

impl HttpModelListing {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModelListing for HttpModelListing {
    async fn list_models(&self, base_url: &str) -> Result<Vec<RawModel>> {
        let url = format!("{}/v1/models", base_url.trim_end_matches('/'));
        debug!(%url, "fetching model listing");

        let response = shared_client().get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body));
        }

        let listing: ModelListResponse = response.json().await?;
        debug!(count = listing.data.len(), "model listing received");
        Ok(listing.data)
    }
}
