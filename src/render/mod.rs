//! Renderer module: trait-based format dispatch for retrieved samples.

pub mod html;
pub mod json;
pub mod markdown;

use crate::error::{Result, SampleError};
use crate::model::RetrievedSample;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_SAMPLE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s.]+)\.([^\s.]+)$").unwrap());

/// Trait for rendering a list of samples into a specific output format.
pub trait Renderer {
    fn render(&self, samples: &[RetrievedSample]) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(SampleError::InvalidArgument(format!(
            "unknown format: {format}. Use html, markdown, or json"
        ))),
    }
}

/// A `<Service>.<Id>` reference to a stored sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRef {
    pub service: String,
    pub id: String,
}

impl SampleRef {
    /// Parse the trailing `Service.Id` pair of `text`. Leading text is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let caps = RE_SAMPLE_REF.captures(text.trim()).ok_or_else(|| {
            SampleError::InvalidArgument(format!(
                "Invalid sample reference {text:?}: expected <Service>.<SampleId>"
            ))
        })?;
        Ok(Self {
            service: caps[1].to_string(),
            id: caps[2].to_string(),
        })
    }
}

impl fmt::Display for SampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.id)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, title: &str, content: &str) -> RetrievedSample {
    RetrievedSample::new(id, "AmazonS3", title, "Some description.", content).unwrap()
}
