//! Pure normalization of raw model descriptors.

use crate::client::RawModel;

use super::heuristics::{heuristic_for, is_excluded};
use super::{ModelOptions, ModelRecord};

/// Conservative default when no heuristic knows the model.
pub const DEFAULT_CONTEXT_TOKENS: u32 = 2048;

pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Map a raw descriptor reported by a source into a display-ready record.
///
/// Deterministic and side-effect free: identical inputs always yield
/// structurally identical output. Never fails; an empty `raw.id` just
/// degenerates to an empty label.
pub fn normalize(raw: &RawModel, source_id: &str) -> ModelRecord {
    let (label, context_tokens) = match heuristic_for(&raw.id) {
        Some(h) => (h.label.to_string(), h.context_tokens),
        None => (derive_label(&raw.id), DEFAULT_CONTEXT_TOKENS),
    };

    ModelRecord {
        id: format!("{}-{}", source_id, raw.id),
        label,
        context_tokens,
        hidden: is_excluded(&raw.id),
        source_id: source_id.to_string(),
        options: ModelOptions {
            model_ref: raw.id.clone(),
            temperature: DEFAULT_TEMPERATURE,
            response_tokens: response_tokens_for(context_tokens),
        },
    }
}

/// Turn a filesystem-flavored identifier into a display label: strip a
/// leading `ggml-` and a trailing `.bin`, then space out the hyphens.
fn derive_label(raw_id: &str) -> String {
    let stem = raw_id.strip_prefix("ggml-").unwrap_or(raw_id);
    let stem = stem.strip_suffix(".bin").unwrap_or(stem);
    stem.replace('-', " ")
}

/// One eighth of the context, round half away from zero (`f64::round`).
fn response_tokens_for(context_tokens: u32) -> u32 {
    (f64::from(context_tokens) / 8.0).round() as u32
}
