//! codesamples: extract, generate and show tagged code samples.
//!
//! - `codesamples extract -s src/ -e java -o samples/`
//! - `codesamples generate -m models/s3.json -o generated/ --extract-to samples/`
//! - `codesamples show -d samples/ AmazonS3.PutObject -f markdown`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codesamples::config::{ExtractConfig, GenerateConfig, ShowConfig};
use codesamples::parser::DEFAULT_COMMENT_MARKER;
use codesamples::pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codesamples",
    about = "Extract tagged code samples from source files and generate them from service models"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan sources for tagged samples and write one document per service
    Extract {
        /// Source directories, files or glob patterns
        #[arg(short = 's', long = "source", required = true, num_args = 1..)]
        sources: Vec<String>,

        /// Extension of files to scan in directories
        #[arg(short = 'e', long, default_value = "java")]
        extension: String,

        /// Output directory for sample documents
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Line comment marker that prefixes sample tags
        #[arg(long, default_value = DEFAULT_COMMENT_MARKER)]
        comment_marker: String,
    },

    /// Generate tagged sample classes from service models
    Generate {
        /// Service model files (JSON)
        #[arg(short = 'm', long = "model", required = true, num_args = 1..)]
        models: Vec<PathBuf>,

        /// Output directory for generated classes
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Also extract the generated classes into this sample directory
        #[arg(long)]
        extract_to: Option<PathBuf>,
    },

    /// Render stored samples by <Service>.<SampleId> reference
    Show {
        /// Directory holding sample documents
        #[arg(short = 'd', long = "samples-dir")]
        samples_dir: PathBuf,

        /// Sample references
        #[arg(required = true)]
        references: Vec<String>,

        /// Output format: html (default), markdown, json
        #[arg(short = 'f', long, default_value = "html")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Extract {
            sources,
            extension,
            output,
            comment_marker,
        } => {
            let config = ExtractConfig {
                source_dirs: sources,
                extension,
                output_dir: output,
                comment_marker,
            };
            let report = pipeline::extract(&config).context("sample extraction failed")?;
            eprintln!(
                "extracted {} samples from {} files into {} documents",
                report.samples,
                report.files,
                report.documents.len()
            );
        }
        Command::Generate {
            models,
            output,
            extract_to,
        } => {
            let config = GenerateConfig {
                models,
                output_dir: output,
                extract_to,
            };
            let report = pipeline::generate(&config).context("sample generation failed")?;
            for path in &report.classes {
                eprintln!("generated {}", path.display());
            }
            for path in &report.skipped {
                eprintln!("warning: no examples in {}, skipped", path.display());
            }
            if let Some(extracted) = &report.extracted {
                eprintln!(
                    "extracted {} samples into {} documents",
                    extracted.samples,
                    extracted.documents.len()
                );
            }
        }
        Command::Show {
            samples_dir,
            references,
            format,
        } => {
            let config = ShowConfig {
                samples_dir,
                references,
                format,
            };
            let output = pipeline::show(&config).context("failed to render samples")?;
            print!("{output}");
        }
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
