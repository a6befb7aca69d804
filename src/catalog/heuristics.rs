//! Curated overrides for known model identifiers.
//!
//! Local servers report filesystem-flavored names (`ggml-gpt4all-j.bin`);
//! the table below hand-corrects the ones we recognize. Both tables are
//! process-wide read-only statics.

/// A hand-maintained correction for a specific known raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelHeuristic {
    pub label: &'static str,
    pub context_tokens: u32,
}

/// Exact-match lookup of a raw identifier in the heuristic table.
pub fn heuristic_for(raw_id: &str) -> Option<ModelHeuristic> {
    match raw_id {
        "ggml-gpt4all-j" => Some(ModelHeuristic {
            label: "GPT4All-J",
            context_tokens: 2048,
        }),
        _ => None,
    }
}

/// Raw identifiers that should be imported hidden (not offered for chat).
/// Currently empty; the mechanism is kept for e.g. embedding-only models.
const NOT_CHAT_MODELS: &[&str] = &[];

/// Whether a raw identifier is on the exclusion list.
pub fn is_excluded(raw_id: &str) -> bool {
    NOT_CHAT_MODELS.contains(&raw_id)
}
