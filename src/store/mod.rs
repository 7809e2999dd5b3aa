//! Per-service sample documents.
//!
//! One JSON document per service, written as `<dir>/<service>.json`:
//!
//! ```json
//! { "codeSamples": [ { "id": "...", "title": "...", "description": "...", "content": "..." } ] }
//! ```

pub mod reader;
pub mod writer;

pub use reader::SampleReader;
pub use writer::{group_by_service, write_samples, SampleDocument};

use crate::error::{Result, SampleError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root key holding the ordered sample entries.
pub const ROOT_KEY: &str = "codeSamples";

/// File extension of stored documents.
pub const DOCUMENT_EXTENSION: &str = "json";

/// One stored entry. Fields are optional on the way in so that an
/// incomplete document reads back as "not found" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Service names become file names, so they may not contain a path separator.
pub fn check_service_name(service: &str) -> Result<()> {
    if service.contains(['/', '\\']) {
        return Err(SampleError::InvalidArgument(format!(
            "Service name cannot contain a path separator: {service}"
        )));
    }
    Ok(())
}

/// Location of the document for `service` under `dir`.
pub fn document_path(dir: &Path, service: &str) -> PathBuf {
    dir.join(format!("{service}.{DOCUMENT_EXTENSION}"))
}
