//! Error kinds shared by extraction, storage, retrieval and generation.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = SampleError> = std::result::Result<T, E>;

/// Structural markup rule that a source line broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupViolation {
    NestedSample,
    EndOutsideSample,
    EndWhileHidden,
    NestedHidden,
    HiddenOutsideSample,
    EndHiddenOutsideHidden,
    TitleOutsideSample,
    DescriptionOutsideSample,
    UnclosedSample { id: String },
}

impl fmt::Display for MarkupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestedSample => {
                f.write_str("Found a BEGIN_SAMPLE tag while already within a sample block")
            }
            Self::EndOutsideSample => {
                f.write_str("Found an END_SAMPLE tag while not within a sample block")
            }
            Self::EndWhileHidden => {
                f.write_str("Sample was still hidden when END_SAMPLE tag was encountered")
            }
            Self::NestedHidden => {
                f.write_str("Found a BEGIN_HIDDEN tag while already within a hidden block")
            }
            Self::HiddenOutsideSample => {
                f.write_str("Found a BEGIN_HIDDEN tag while not within a sample block")
            }
            Self::EndHiddenOutsideHidden => {
                f.write_str("Found an END_HIDDEN tag while not within a hidden block")
            }
            Self::TitleOutsideSample => {
                f.write_str("Found a TITLE tag while not within a sample block")
            }
            Self::DescriptionOutsideSample => {
                f.write_str("Found a DESCRIPTION tag while not within a sample block")
            }
            Self::UnclosedSample { id } => write!(f, "Hit EOF with sample still open: {id}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("{violation} (File: {file}, Line: {line})")]
    Markup {
        violation: MarkupViolation,
        file: String,
        line: usize,
    },

    #[error("Required field {field} was not provided (File: {file}, Line: {line})")]
    MissingField {
        field: &'static str,
        file: String,
        line: usize,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("could not find {kind} '{name}' ({context})")]
    Lookup {
        kind: &'static str,
        name: String,
        context: String,
    },

    #[error("cannot render field '{field}': {reason} ({context})")]
    Generation {
        field: String,
        reason: String,
        context: String,
    },

    #[error("Could not parse sample (Service Name: {service}, Sample ID: {id})")]
    Retrieval {
        service: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid service model {}", path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o failure on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl SampleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Fail with [`SampleError::InvalidArgument`] when `value` is empty.
pub fn require_non_empty<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(SampleError::InvalidArgument(message.to_string()));
    }
    Ok(value)
}
