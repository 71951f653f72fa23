pub mod extract;
pub mod lines;
pub mod patterns;
pub mod sections;

use crate::record::ResumeRecord;

/// Tunable heuristics. Variant rules live here as configuration instead of
/// as separate code paths.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// How many leading lines are scanned for a name line.
    pub name_window: usize,
    /// Optional cap on tokens per name candidate line.
    pub name_max_tokens: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { name_window: 10, name_max_tokens: None }
    }
}

impl ExtractOptions {
    /// Narrow search window with the token cap enabled.
    pub fn strict() -> Self {
        Self { name_window: 5, name_max_tokens: Some(4) }
    }
}

/// Three-pass pipeline: raw text → normalized lines → section slices →
/// extracted record. Never fails: heuristic misses degrade to absent
/// fields, so any input string yields a structurally complete record.
pub fn extract_resume(text: &str, opts: &ExtractOptions) -> ResumeRecord {
    let lines = lines::normalize(text);
    extract::extract_all(&lines, &patterns::PATTERNS, opts)
}
