//! Parser module: source discovery and multi-file extraction.

pub mod markup;

pub use markup::{MarkupParser, DEFAULT_COMMENT_MARKER};

use crate::error::{Result, SampleError};
use crate::model::SampleRecord;
use crate::text::file_matches_extension;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand source arguments into an ordered list of files.
///
/// - a file is taken as given, whatever its extension
/// - a directory is walked recursively (sorted by file name) for files
///   matching `extension`
/// - anything else is treated as a glob pattern
///
/// Argument order is kept; a file reached twice is listed once.
pub fn collect_source_files(sources: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        let path = Path::new(source);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(walk_dir(path, extension)?);
        } else {
            let matches: Vec<_> = glob::glob(source)
                .map_err(|e| {
                    SampleError::InvalidArgument(format!("invalid glob pattern {source}: {e}"))
                })?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect();
            if matches.is_empty() {
                warn!(pattern = %source, "no files matched");
            }
            files.extend(matches);
        }
    }

    let mut seen = HashSet::new();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

fn walk_dir(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            SampleError::io(path, e.into())
        })?;
        if entry.file_type().is_file() && file_matches_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Parse every file in order and concatenate their samples.
///
/// The first malformed file aborts the whole run.
pub fn extract_samples(parser: &MarkupParser, files: &[PathBuf]) -> Result<Vec<SampleRecord>> {
    let mut samples = Vec::new();
    for path in files {
        let found = parser.parse_file(path)?;
        debug!(file = %path.display(), samples = found.len(), "parsed source file");
        samples.extend(found);
    }
    Ok(samples)
}
