pub mod batch;
pub mod table;
pub mod title_cleaner;
pub mod validation;
pub mod workflow;

// Re-export the normalizer for convenient access
pub use title_cleaner::{clean_job_title, Generation, TitleCleaner};

// Re-export batch types used by drivers and benchmarks
pub use batch::{
    classify, clean_rows, clean_rows_parallel,
    BatchConfig, BatchStats, CleanedRow, RowOutcome
};

pub use table::{clean_csv_file, default_output_path};
pub use validation::{validate_files, validate_job, JobName, ValidationSummary};
pub use workflow::{handle_event, WorkflowOutcome, WorkflowResponse};
