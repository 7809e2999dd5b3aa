//! Batch configuration for the extract, generate and show pipelines.
//!
//! The CLI converts its arguments into these structs; library entry points
//! never see clap types.

use crate::error::{Result, SampleError};
use crate::parser::DEFAULT_COMMENT_MARKER;
use std::path::PathBuf;

/// Configuration for [`crate::pipeline::extract`].
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Source directories, files or glob patterns.
    pub source_dirs: Vec<String>,
    /// Extension of files picked up while walking directories, without the dot.
    pub extension: String,
    pub output_dir: PathBuf,
    pub comment_marker: String,
}

impl ExtractConfig {
    pub fn new(source_dirs: Vec<String>, extension: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dirs,
            extension: extension.into(),
            output_dir: output_dir.into(),
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_dirs.is_empty() || self.source_dirs.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("Source directories must be provided"));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(invalid("File extension must be provided"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(invalid("Output directory must be provided"));
        }
        if self.comment_marker.trim().is_empty() {
            return Err(invalid("Comment marker must be provided"));
        }
        Ok(())
    }

    /// Extension without a leading dot.
    pub fn bare_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Configuration for [`crate::pipeline::generate`].
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Service model documents (JSON).
    pub models: Vec<PathBuf>,
    /// Directory receiving the generated sample classes.
    pub output_dir: PathBuf,
    /// When set, the generated classes are extracted into this directory.
    pub extract_to: Option<PathBuf>,
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(invalid("At least one service model must be provided"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(invalid("Output directory must be provided"));
        }
        if matches!(&self.extract_to, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(invalid("Extraction directory must not be empty"));
        }
        Ok(())
    }
}

/// Configuration for [`crate::pipeline::show`].
#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub samples_dir: PathBuf,
    /// `<Service>.<SampleId>` references, rendered in order.
    pub references: Vec<String>,
    /// Output format: html, markdown or json.
    pub format: String,
}

impl ShowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples_dir.as_os_str().is_empty() {
            return Err(invalid("Sample directory must be provided"));
        }
        if self.references.is_empty() {
            return Err(invalid("At least one sample reference must be provided"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> SampleError {
    SampleError::InvalidArgument(message.to_string())
}
