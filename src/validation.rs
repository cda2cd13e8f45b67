// WHY: Post-run check of a job folder: how many rows changed and what a few of them look like

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::table::{parse_table, CLEANED_TITLE_HEADER, HAS_CHANGED_HEADER, ORIGINAL_TITLE_HEADER};

pub const JOB_PREFIX: &str = "JobTitleClean";

/// Changed pairs included in a summary
pub const SAMPLE_LIMIT: usize = 10;

/// Job identifier of the form `JobTitleClean` followed by exactly three digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for JobName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let valid = s
            .strip_prefix(JOB_PREFIX)
            .is_some_and(|digits| digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()));
        if !valid {
            bail!("Invalid job name: {s:?} (expected {JOB_PREFIX}NNN)");
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File locations inside a job folder
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub folder: PathBuf,
    pub original: PathBuf,
    pub cleaned: PathBuf,
}

impl JobPaths {
    pub fn new(jobs_dir: &Path, job: &JobName) -> Self {
        let folder = jobs_dir.join(job.as_str());
        Self {
            original: folder.join(format!("{job}-original.csv")),
            cleaned: folder.join(format!("{job}-cleaned.csv")),
            folder,
        }
    }
}

/// One changed original/cleaned pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedPair {
    #[serde(rename = "Original Job Title")]
    pub original: String,
    #[serde(rename = "Cleaned Job Title")]
    pub cleaned: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub job: Option<String>,
    pub total_rows: usize,
    pub changed_rows: usize,
    pub sample: Vec<ChangedPair>,
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(job) = &self.job {
            writeln!(f, "Job: {job}")?;
        }
        writeln!(f, "Total rows: {}", self.total_rows)?;
        writeln!(f, "Changed rows: {}", self.changed_rows)?;
        writeln!(f, "Sample (up to {SAMPLE_LIMIT}):")?;
        for pair in &self.sample {
            writeln!(f, "  {:?} -> {:?}", pair.original, pair.cleaned)?;
        }
        Ok(())
    }
}

/// Validate the original/cleaned pair of a job folder
pub async fn validate_job(jobs_dir: &Path, job: &JobName) -> Result<ValidationSummary> {
    let paths = JobPaths::new(jobs_dir, job);
    if !paths.original.exists() || !paths.cleaned.exists() {
        bail!("Missing original/cleaned CSV in {}", paths.folder.display());
    }
    let mut summary = validate_files(&paths.original, &paths.cleaned).await?;
    summary.job = Some(job.to_string());
    Ok(summary)
}

/// A blank original never matches its cleaned cell, mirroring the batch's discard rule
fn pair_differs(original: &str, cleaned: &str) -> bool {
    original.trim().is_empty() || original != cleaned
}

/// Compare a cleaned table against its source
///
/// Rows are counted from the `Has Changed` column when present, otherwise by
/// comparing the original and cleaned cells.
pub async fn validate_files(original: &Path, cleaned: &Path) -> Result<ValidationSummary> {
    let original_bytes = tokio::fs::read(original)
        .await
        .with_context(|| format!("Failed to read {}", original.display()))?;
    let cleaned_bytes = tokio::fs::read(cleaned)
        .await
        .with_context(|| format!("Failed to read {}", cleaned.display()))?;

    let total_rows = parse_table(&original_bytes)?.records.len();
    let cleaned_table = parse_table(&cleaned_bytes)?;

    let column = |name: &str| {
        cleaned_table
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("Column {name:?} not found in {}", cleaned.display()))
    };
    let original_col = column(ORIGINAL_TITLE_HEADER)?;
    let cleaned_col = column(CLEANED_TITLE_HEADER)?;

    let flag_col = cleaned_table.headers.iter().position(|h| h == HAS_CHANGED_HEADER);

    let cell = |record: &[String], position: usize| record.get(position).cloned().unwrap_or_default();
    let changed: Vec<ChangedPair> = cleaned_table
        .records
        .iter()
        .filter(|record| match flag_col {
            Some(position) => record.get(position).is_some_and(|flag| flag.trim() == "True"),
            None => pair_differs(
                &cell(record.as_slice(), original_col),
                &cell(record.as_slice(), cleaned_col),
            ),
        })
        .map(|record| ChangedPair {
            original: cell(record.as_slice(), original_col),
            cleaned: cell(record.as_slice(), cleaned_col),
        })
        .collect();

    info!(total_rows, changed_rows = changed.len(), "Validated {}", cleaned.display());

    Ok(ValidationSummary {
        job: None,
        total_rows,
        changed_rows: changed.len(),
        sample: changed.into_iter().take(SAMPLE_LIMIT).collect(),
    })
}
