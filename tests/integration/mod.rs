// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const UTF8_BOM: &str = "\u{FEFF}";

/// Test fixture helper for creating temporary directories with CSV exports and job folders
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file under the fixture root, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write a single-column CSV with the given header and values
    pub fn create_title_csv<P: AsRef<Path>>(&self, relative_path: P, header: &str, values: &[&str]) -> PathBuf {
        let mut content = format!("{header}\n");
        for value in values {
            content.push_str(&csv_cell(value));
            content.push('\n');
        }
        self.create_file(relative_path, &content)
    }

    /// Directory holding job folders
    pub fn jobs_dir(&self) -> PathBuf {
        self.root_path.join("jobs")
    }

    /// Original upload path for a job
    pub fn job_original_path(&self, job: &str) -> PathBuf {
        self.jobs_dir().join(job).join(format!("{job}-original.csv"))
    }

    /// Cleaned output path for a job
    pub fn job_cleaned_path(&self, job: &str) -> PathBuf {
        self.jobs_dir().join(job).join(format!("{job}-cleaned.csv"))
    }

    /// Create a job folder with an original upload of the given titles
    pub fn create_job(&self, job: &str, values: &[&str]) -> PathBuf {
        let relative = Path::new("jobs").join(job).join(format!("{job}-original.csv"));
        self.create_title_csv(relative, "Original Job Title", values)
    }
}

/// Quote a CSV cell when needed
pub fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Read an output CSV and split it into rows of cells, asserting the BOM prefix
pub fn read_output_rows(path: &Path) -> Vec<Vec<String>> {
    let content = fs::read_to_string(path).expect("Failed to read output file");
    let body = content
        .strip_prefix(UTF8_BOM)
        .expect("Output should start with a UTF-8 BOM");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_bytes());
    reader
        .records()
        .map(|record| {
            record
                .expect("Output should be valid CSV")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
