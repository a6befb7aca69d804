//! Normalized model records, heuristics, and the in-process registry.

pub mod heuristics;
pub mod normalize;
pub mod registry;

pub use heuristics::ModelHeuristic;
pub use normalize::{normalize, DEFAULT_CONTEXT_TOKENS, DEFAULT_TEMPERATURE};
pub use registry::ModelRegistry;

use serde::{Deserialize, Serialize};

/// A display-ready model record, fully defaulted at construction.
///
/// Records are immutable once built; a subsequent refresh replaces them
/// wholesale through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Globally unique composite key: `"{source_id}-{raw_id}"`.
    pub id: String,
    /// Human-readable display name.
    pub label: String,
    /// Maximum input+output token budget the model supports.
    pub context_tokens: u32,
    /// True for models the source reports but which should not be offered
    /// for chat (membership in the static exclusion list).
    pub hidden: bool,
    /// Provenance: the source this record was imported from. A back-reference,
    /// not ownership.
    pub source_id: String,
    pub options: ModelOptions,
}

/// Per-model tunables derived during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// The raw identifier used to address the model in future calls.
    pub model_ref: String,
    pub temperature: f32,
    /// Portion of the context reserved for generated output.
    pub response_tokens: u32,
}
