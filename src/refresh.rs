//! The fetch-normalize-commit flow for one source.

use tracing::debug;

use crate::catalog::{normalize, ModelRegistry};
use crate::client::ModelListing;
use crate::error::{ModelportError, Result};
use crate::source::SourceStore;

/// Refresh the registry from one configured source.
///
/// Looks up the source, validates its host, fetches the raw listing,
/// normalizes every descriptor, and commits the batch to the registry in one
/// step. Returns the number of records committed. Any failure surfaces as a
/// single error whose `Display` output is the user-facing message; there is
/// no retry.
pub async fn refresh_source(
    store: &SourceStore,
    listing: &dyn ModelListing,
    registry: &ModelRegistry,
    source_id: &str,
) -> Result<usize> {
    let config = store.get(source_id).ok_or_else(|| {
        ModelportError::Configuration(format!("unknown source {source_id:?}"))
    })?;
    config.validate_host()?;

    let raw = listing.list_models(&config.host).await?;
    let batch: Vec<_> = raw.iter().map(|m| normalize(m, source_id)).collect();
    let count = batch.len();

    registry.add_models(batch);
    debug!(source = source_id, count, "registry updated from source");
    Ok(count)
}
