// WHY: Batch classification of a column of raw titles into unchanged / modified / discarded
// Rows are independent; parallel runs must reassemble results in source order

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::title_cleaner::{Generation, TitleCleaner};

/// Configuration for batch cleaning behavior
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Pipeline generation used for every row
    pub generation: Generation,
    /// Rows handed to one blocking task
    pub chunk_size: usize,
    /// Chunks cleaned at the same time
    pub max_workers: usize,
    /// Whether to draw a console progress bar
    pub show_progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            generation: Generation::Advanced,
            chunk_size: 1024,
            max_workers: num_cpus::get().max(1),
            show_progress: false,
        }
    }
}

/// Per-row classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    /// Cleaned value equals the trimmed original
    Unchanged,
    /// Cleaned value differs from the trimmed original
    Modified,
    /// The title was junk; output cell is empty
    Discarded,
}

impl RowOutcome {
    pub fn has_changed(&self) -> bool {
        !matches!(self, RowOutcome::Unchanged)
    }
}

/// One row of the augmented table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRow {
    /// 1-based row index
    pub index: usize,
    /// Original value as read from the source
    pub original: String,
    /// Cleaned value, empty when discarded
    pub cleaned: String,
    pub outcome: RowOutcome,
}

impl CleanedRow {
    pub fn has_changed(&self) -> bool {
        self.outcome.has_changed()
    }
}

/// Aggregate counters for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_rows: u64,
    pub good: u64,
    pub cleaned: u64,
    pub removed: u64,
}

impl BatchStats {
    pub fn record(&mut self, outcome: RowOutcome) {
        self.total_rows += 1;
        match outcome {
            RowOutcome::Unchanged => self.good += 1,
            RowOutcome::Modified => self.cleaned += 1,
            RowOutcome::Discarded => self.removed += 1,
        }
    }

    /// Rows whose "Has Changed" flag is true
    pub fn changed(&self) -> u64 {
        self.cleaned + self.removed
    }

    pub fn from_rows(rows: &[CleanedRow]) -> Self {
        let mut stats = Self::default();
        for row in rows {
            stats.record(row.outcome);
        }
        stats
    }
}

/// Classify a cleaning result against the trimmed original
pub fn classify(original_trimmed: &str, cleaned: Option<&str>) -> RowOutcome {
    match cleaned {
        None | Some("") => RowOutcome::Discarded,
        Some(value) if value == original_trimmed => RowOutcome::Unchanged,
        Some(_) => RowOutcome::Modified,
    }
}

/// Clean and classify one value
pub fn clean_row(cleaner: &TitleCleaner, index: usize, original: &str) -> CleanedRow {
    let trimmed = original.trim();
    let cleaned = cleaner.clean(trimmed);
    let outcome = classify(trimmed, cleaned.as_deref());
    CleanedRow {
        index,
        original: original.to_string(),
        cleaned: cleaned.unwrap_or_default(),
        outcome,
    }
}

/// Sequentially clean a column of values
pub fn clean_rows<S: AsRef<str>>(values: &[S], cleaner: &TitleCleaner) -> (Vec<CleanedRow>, BatchStats) {
    let rows: Vec<CleanedRow> = values
        .iter()
        .enumerate()
        .map(|(i, value)| clean_row(cleaner, i + 1, value.as_ref()))
        .collect();
    let stats = BatchStats::from_rows(&rows);
    debug!(?stats, "Sequential batch finished");
    (rows, stats)
}

/// Clean a column of values on the blocking pool, one task per chunk
///
/// Output rows keep the source order regardless of which chunk finishes first.
pub async fn clean_rows_parallel(
    values: Vec<String>,
    config: &BatchConfig,
    progress: Option<&ProgressBar>,
) -> Result<(Vec<CleanedRow>, BatchStats)> {
    let cleaner = TitleCleaner::new(config.generation);
    let chunk_size = config.chunk_size.max(1);
    let max_workers = config.max_workers.max(1);
    let total = values.len();

    let mut chunks = Vec::with_capacity(total.div_ceil(chunk_size));
    let mut values = values.into_iter();
    let mut offset = 0;
    loop {
        let chunk: Vec<String> = values.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        chunks.push((offset, chunk));
        offset += len;
    }

    debug!(chunks = chunks.len(), chunk_size, max_workers, "Dispatching batch chunks");

    // buffered() yields in submission order, so rows come back in source order
    let results: Vec<_> = stream::iter(chunks)
        .map(|(start, chunk)| {
            let progress = progress.cloned();
            tokio::task::spawn_blocking(move || {
                let rows: Vec<CleanedRow> = chunk
                    .iter()
                    .enumerate()
                    .map(|(i, value)| clean_row(&cleaner, start + i + 1, value))
                    .collect();
                if let Some(bar) = progress {
                    bar.inc(rows.len() as u64);
                }
                rows
            })
        })
        .buffered(max_workers)
        .collect()
        .await;

    let mut rows = Vec::with_capacity(total);
    for result in results {
        rows.extend(result.context("batch chunk task failed")?);
    }

    let stats = BatchStats::from_rows(&rows);
    info!(
        total_rows = stats.total_rows,
        good = stats.good,
        cleaned = stats.cleaned,
        removed = stats.removed,
        "Batch cleaning completed"
    );
    Ok((rows, stats))
}
