//! Sample entities: the in-progress record built by the parser and the
//! validated sample handed back by the reader.

use crate::error::{require_non_empty, Result};
use crate::text;
use serde::Serialize;

/// One sample extracted from a source file.
///
/// `id` and `service` are fixed at construction. Title, description and code
/// lines accumulate while the parser holds the record open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    id: String,
    service: String,
    title: String,
    description: String,
    code_lines: Vec<String>,
}

impl SampleRecord {
    pub fn new(id: impl Into<String>, service: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let service = service.into();
        require_non_empty(&id, "Sample ID must be provided!")?;
        require_non_empty(&service, "Service name must be provided!")?;
        Ok(Self {
            id,
            service,
            title: String::new(),
            description: String::new(),
            code_lines: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn code_lines(&self) -> &[String] {
        &self.code_lines
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn append_line(&mut self, line: impl Into<String>) {
        self.code_lines.push(line.into());
    }

    /// Code lines shifted left by their common indentation and joined with `\n`.
    pub fn formatted_code(&self) -> String {
        text::dedent(&self.code_lines)
    }
}

/// A fully populated sample returned by lookup. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievedSample {
    id: String,
    service: String,
    title: String,
    description: String,
    content: String,
}

impl RetrievedSample {
    /// Fails with `InvalidArgument` on any empty field. The reader checks
    /// emptiness itself first and reports an incomplete entry as absent.
    pub fn new(
        id: impl Into<String>,
        service: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let sample = Self {
            id: id.into(),
            service: service.into(),
            title: title.into(),
            description: description.into(),
            content: content.into(),
        };
        require_non_empty(&sample.id, "Sample ID must be provided")?;
        require_non_empty(&sample.service, "Sample service name must be provided")?;
        require_non_empty(&sample.title, "Sample title must be provided")?;
        require_non_empty(&sample.description, "Sample description must be provided")?;
        require_non_empty(&sample.content, "Sample content must be provided")?;
        Ok(sample)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
