// WHY: CSV batch driver around the batch classifier
// The output file is only written once the whole table has been cleaned

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::batch::{clean_rows_parallel, BatchConfig, BatchStats, CleanedRow};

pub const JOB_TITLE_HEADER: &str = "Job Title";
pub const ORIGINAL_TITLE_HEADER: &str = "Original Job Title";
pub const CLEANED_TITLE_HEADER: &str = "Cleaned Job Title";
pub const HAS_CHANGED_HEADER: &str = "Has Changed";
pub const INDEX_HEADER: &str = "Index";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Input table held in memory
#[derive(Debug, Clone)]
pub struct TitleTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// The column chosen for cleaning and the header it is written under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleColumn {
    pub position: usize,
    pub header: String,
}

/// Locate the title column
///
/// `Job Title` is reported as `Original Job Title` unless that column already exists;
/// with neither present the first column is used under its own header.
pub fn locate_title_column(headers: &[String]) -> Option<TitleColumn> {
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);

    if let Some(position) = find(ORIGINAL_TITLE_HEADER) {
        return Some(TitleColumn { position, header: ORIGINAL_TITLE_HEADER.to_string() });
    }
    if let Some(position) = find(JOB_TITLE_HEADER) {
        return Some(TitleColumn { position, header: ORIGINAL_TITLE_HEADER.to_string() });
    }
    headers.first().map(|h| TitleColumn { position: 0, header: h.clone() })
}

/// Parse CSV bytes, tolerating a leading BOM and ragged rows
pub fn parse_table(bytes: &[u8]) -> Result<TitleTable> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse CSV record {}", line + 1))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(TitleTable { headers, records })
}

/// Render the four-column augmented table, BOM-prefixed
pub fn render_output(title_header: &str, rows: &[CleanedRow]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record([INDEX_HEADER, title_header, CLEANED_TITLE_HEADER, HAS_CHANGED_HEADER])?;
        for row in rows {
            let index = row.index.to_string();
            let changed = if row.has_changed() { "True" } else { "False" };
            writer.write_record([index.as_str(), row.original.as_str(), row.cleaned.as_str(), changed])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Default output location: `<stem>-cleaned.csv` beside the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("titles");
    input.with_file_name(format!("{stem}-cleaned.csv"))
}

/// Clean the title column of `input` and write the augmented table to `output`
///
/// Fails without touching `output` when the input has no header or no data rows.
pub async fn clean_csv_file(input: &Path, output: &Path, config: &BatchConfig) -> Result<BatchStats> {
    debug!("Reading input table: {}", input.display());
    let bytes = tokio::fs::read(input)
        .await
        .with_context(|| format!("Failed to read input file {}", input.display()))?;

    let table = parse_table(&bytes)?;
    if table.records.is_empty() {
        warn!("Input table is empty: {}", input.display());
        bail!("Input file is empty: {}", input.display());
    }
    let Some(column) = locate_title_column(&table.headers) else {
        bail!("Input file has no header row: {}", input.display());
    };
    info!(column = %column.header, position = column.position, rows = table.records.len(), "Located title column");

    let values: Vec<String> = table
        .records
        .into_iter()
        .map(|mut record| {
            if column.position < record.len() {
                record.swap_remove(column.position)
            } else {
                String::new()
            }
        })
        .collect();

    let progress = config.show_progress.then(|| progress_bar(values.len() as u64));
    let (rows, stats) = clean_rows_parallel(values, config, progress.as_ref()).await?;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let rendered = render_output(&column.header, &rows)?;
    tokio::fs::write(output, rendered)
        .await
        .with_context(|| format!("Failed to write output file {}", output.display()))?;

    info!(
        "Wrote {} rows to {} ({} good, {} cleaned, {} removed)",
        stats.total_rows,
        output.display(),
        stats.good,
        stats.cleaned,
        stats.removed
    );
    Ok(stats)
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rows ({elapsed})") {
        bar.set_style(style);
    }
    bar
}
