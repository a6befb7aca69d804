//! Convenience re-exports for common use.

pub use crate::catalog::{normalize, ModelOptions, ModelRecord, ModelRegistry};
pub use crate::client::{HttpModelListing, ModelListing, RawModel};
pub use crate::error::{ModelportError, Result};
pub use crate::refresh::refresh_source;
pub use crate::source::{SourceConfig, SourceStore};
