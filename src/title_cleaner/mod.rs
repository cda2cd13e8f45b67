// WHY: Single entry point for job-title normalization
// Stateless per call; reference tables and patterns are process-wide statics

use serde::{Deserialize, Serialize};
use tracing::trace;

pub mod casing;
pub mod dictionaries;
pub mod stages;

/// Pipeline generation
///
/// `Advanced` is the canonical behavior. `Baseline` reproduces the first generation
/// (narrower leading strip, smaller junk list, no translation or abbreviation tables)
/// and is kept for regression comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Baseline,
    #[default]
    Advanced,
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generation::Baseline => write!(f, "baseline"),
            Generation::Advanced => write!(f, "advanced"),
        }
    }
}

/// Job-title normalizer
///
/// `clean` returns `Some(title)` for a usable title and `None` when the input should
/// be discarded as junk. It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCleaner {
    generation: Generation,
}

impl TitleCleaner {
    pub fn new(generation: Generation) -> Self {
        Self { generation }
    }

    pub fn advanced() -> Self {
        Self::new(Generation::Advanced)
    }

    pub fn baseline() -> Self {
        Self::new(Generation::Baseline)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Clean a JSON value; anything other than a string is discarded
    pub fn clean_value(&self, value: &serde_json::Value) -> Option<String> {
        value.as_str().and_then(|title| self.clean(title))
    }

    /// Normalize one raw title
    pub fn clean(&self, raw: &str) -> Option<String> {
        let result = match self.generation {
            Generation::Advanced => clean_advanced(raw),
            Generation::Baseline => clean_baseline(raw),
        };
        trace!(raw, cleaned = ?result, generation = %self.generation, "cleaned title");
        result
    }
}

/// Clean with the advanced generation; a missing value is discarded
pub fn clean_job_title(title: Option<&str>) -> Option<String> {
    title.and_then(|t| TitleCleaner::advanced().clean(t))
}

fn clean_advanced(raw: &str) -> Option<String> {
    let decoded = stages::decode_and_trim(raw);
    let stripped = stages::strip_edge_punctuation(&decoded);
    let unwrapped = stages::unwrap_enclosing(stripped);
    let dequoted = stages::remove_quote_runs(unwrapped);
    let plain = stages::strip_diacritics(&dequoted);
    let mut title = stages::remove_emails(&plain);

    if title.is_empty() {
        return None;
    }

    match dictionaries::translate(&title) {
        Some(gloss) => title = gloss.to_string(),
        None if !stages::is_printable_ascii(&title) => return None,
        None => {}
    }

    if stages::is_degenerate(&title) || dictionaries::is_junk(Generation::Advanced, &title) {
        return None;
    }

    if let Some(expansion) = dictionaries::expand_abbreviation(&title) {
        title = expansion.to_string();
    }

    let title = finish(Generation::Advanced, &title);
    let title = stages::strip_edge_punctuation(&title);
    (!title.is_empty()).then(|| title.to_string())
}

fn clean_baseline(raw: &str) -> Option<String> {
    let decoded = stages::decode_and_trim(raw);
    let stripped = stages::strip_leading_separators(&decoded);
    let unwrapped = stages::unwrap_enclosing(&stripped);
    let unticked = stages::strip_leading_backticks(unwrapped);
    let dequoted = stages::remove_quote_runs(unticked);
    let plain = stages::strip_diacritics(&dequoted);
    let title = stages::remove_emails(&plain);

    if title.is_empty()
        || stages::is_degenerate(&title)
        || dictionaries::is_junk(Generation::Baseline, &title)
    {
        return None;
    }

    let title = finish(Generation::Baseline, &title);
    (!title.is_empty()).then_some(title)
}

// WHY: casing must run before the conjunction pass, which only matches the capitalized "And"
fn finish(generation: Generation, title: &str) -> String {
    let title = stages::uppercase_roman_numerals(title);
    let title = casing::case_words(generation, &title);
    let title = stages::normalize_vertical_bars(&title);
    let title = stages::space_slashes(&title);
    let title = stages::lowercase_conjunctions(&title);
    stages::canonicalize_post_doc(&title).into_owned()
}
