use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use titleclean::{
    clean_csv_file, default_output_path, handle_event, validate_job, BatchConfig, BatchStats,
    Generation, JobName, TitleCleaner,
};

#[derive(Parser, Debug)]
#[command(name = "titleclean")]
#[command(about = "Normalize CRM job titles and flag junk entries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct GenerationArgs {
    /// Use the first-generation pipeline (no translation or abbreviation tables)
    #[arg(long)]
    baseline: bool,
}

impl GenerationArgs {
    fn generation(self) -> Generation {
        if self.baseline {
            Generation::Baseline
        } else {
            Generation::Advanced
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean the job-title column of a CSV file
    Clean {
        /// Input CSV file
        input: PathBuf,

        /// Output CSV file (default: <input stem>-cleaned.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        generation: GenerationArgs,

        /// Rows per parallel work unit
        #[arg(long, default_value_t = 1024)]
        chunk_size: usize,

        /// Chunks cleaned concurrently (default: number of CPUs)
        #[arg(long)]
        workers: Option<usize>,

        /// Suppress console progress bar
        #[arg(long)]
        no_progress: bool,

        /// Write run statistics as JSON to this path
        #[arg(long)]
        stats_out: Option<PathBuf>,
    },

    /// Clean individual titles given on the command line
    Title {
        /// Raw titles
        #[arg(required = true)]
        titles: Vec<String>,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Summarize the changes made by a job run
    Validate {
        /// Job name, e.g. JobTitleClean001
        job: String,

        /// Jobs directory
        #[arg(long, default_value = "jobs")]
        jobs_dir: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read one workflow event (JSON) from stdin and print the response
    Workflow {
        #[command(flatten)]
        generation: GenerationArgs,
    },
}

/// Run-level statistics written by `clean --stats-out`
#[derive(Serialize, Debug)]
struct RunStats {
    input: String,
    output: String,
    generation: Generation,
    #[serde(flatten)]
    counts: BatchStats,
    processing_time_ms: u64,
    rows_per_sec: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    info!(?cli, "Parsed CLI arguments");

    match cli.command {
        Command::Clean { input, output, generation, chunk_size, workers, no_progress, stats_out } => {
            let defaults = BatchConfig::default();
            let config = BatchConfig {
                generation: generation.generation(),
                chunk_size,
                max_workers: workers.unwrap_or(defaults.max_workers),
                show_progress: !no_progress,
            };
            run_clean(input, output, config, stats_out).await
        }
        Command::Title { titles, generation } => {
            let cleaner = TitleCleaner::new(generation.generation());
            for title in &titles {
                match cleaner.clean(title) {
                    Some(cleaned) => println!("{cleaned}"),
                    None => println!("<discarded>"),
                }
            }
            Ok(())
        }
        Command::Validate { job, jobs_dir, json } => {
            let job: JobName = job.parse()?;
            let summary = validate_job(&jobs_dir, &job).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
            Ok(())
        }
        Command::Workflow { generation } => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read event from stdin")?;
            let event: serde_json::Value =
                serde_json::from_str(&raw).context("Workflow event is not valid JSON")?;
            let response = handle_event(&event, &TitleCleaner::new(generation.generation()));
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
    }
}

async fn run_clean(
    input: PathBuf,
    output: Option<PathBuf>,
    config: BatchConfig,
    stats_out: Option<PathBuf>,
) -> Result<()> {
    // Fail early with a clear message before any output is produced
    if !input.is_file() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let output = output.unwrap_or_else(|| default_output_path(&input));

    let start = std::time::Instant::now();
    let stats = clean_csv_file(&input, &output, &config).await?;
    let elapsed = start.elapsed();

    println!("titleclean v{} - {}", env!("CARGO_PKG_VERSION"), output.display());
    println!("  Total rows: {}", stats.total_rows);
    println!("  Good:       {}", stats.good);
    println!("  Cleaned:    {}", stats.cleaned);
    println!("  Removed:    {}", stats.removed);

    if let Some(stats_path) = stats_out {
        let secs = elapsed.as_secs_f64();
        let run_stats = RunStats {
            input: input.display().to_string(),
            output: output.display().to_string(),
            generation: config.generation,
            counts: stats,
            processing_time_ms: elapsed.as_millis() as u64,
            rows_per_sec: if secs > 0.0 { stats.total_rows as f64 / secs } else { 0.0 },
        };
        let content = serde_json::to_string_pretty(&run_stats)?;
        tokio::fs::write(&stats_path, content)
            .await
            .with_context(|| format!("Failed to write stats file {}", stats_path.display()))?;
        info!("Run statistics written to {}", stats_path.display());
    }

    Ok(())
}
