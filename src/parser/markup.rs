//! Sample markup parser: line-by-line state machine.
//!
//! Recognized tags, each on its own comment line:
//!
//! ```text
//! // BEGIN_SAMPLE:<service>.<id>
//! // TITLE:<text>
//! // DESCRIPTION:<text>
//! // BEGIN_HIDDEN
//! // END_HIDDEN
//! // END_SAMPLE
//! ```
//!
//! Every other line inside an open, visible sample becomes a code line.

use crate::error::{MarkupViolation, Result, SampleError};
use crate::model::SampleRecord;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Comment marker used by the tags when none is configured.
pub const DEFAULT_COMMENT_MARKER: &str = "//";

// -- Tag patterns -------------------------------------------------------------

struct TagPatterns {
    begin_sample: Regex,
    end_sample: Regex,
    begin_hidden: Regex,
    end_hidden: Regex,
    title: Regex,
    description: Regex,
}

impl TagPatterns {
    fn new(marker: &str) -> Result<Self> {
        let marker = regex::escape(marker);
        let tag = |body: &str| Regex::new(&format!(r"^{marker}\s*{body}"));
        Ok(Self {
            begin_sample: tag(r"BEGIN_SAMPLE:([^.]+)\.([^.]+)$")?,
            end_sample: tag("END_SAMPLE")?,
            begin_hidden: tag("BEGIN_HIDDEN")?,
            end_hidden: tag("END_HIDDEN")?,
            title: tag("TITLE:(.*)$")?,
            description: tag("DESCRIPTION:(.*)$")?,
        })
    }
}

/// What a single line means to the state machine.
#[derive(Debug, PartialEq, Eq)]
enum Tag<'a> {
    BeginSample { service: &'a str, id: &'a str },
    EndSample,
    BeginHidden,
    EndHidden,
    Title(&'a str),
    Description(&'a str),
    Text,
}

// -- Parser state -------------------------------------------------------------

/// The open record lives only in the two in-sample states.
#[derive(Debug, Default)]
enum State {
    #[default]
    Outside,
    InSample(SampleRecord),
    InSampleHidden(SampleRecord),
}

impl State {
    fn record_mut(&mut self) -> Option<&mut SampleRecord> {
        match self {
            State::Outside => None,
            State::InSample(r) | State::InSampleHidden(r) => Some(r),
        }
    }
}

/// Per-file scan: line counter, current state and finished samples.
struct Scan<'p> {
    parser: &'p MarkupParser,
    file: String,
    line: usize,
    state: State,
    samples: Vec<SampleRecord>,
}

impl<'p> Scan<'p> {
    fn new(parser: &'p MarkupParser, file: &str) -> Self {
        Self {
            parser,
            file: file.to_string(),
            line: 0,
            state: State::Outside,
            samples: Vec::new(),
        }
    }

    fn violation(&self, violation: MarkupViolation) -> SampleError {
        SampleError::Markup {
            violation,
            file: self.file.clone(),
            line: self.line,
        }
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let tag = self.parser.classify(line);

        self.state = match (std::mem::take(&mut self.state), tag) {
            (State::Outside, Tag::BeginSample { service, id }) => {
                State::InSample(SampleRecord::new(id, service)?)
            }
            (_, Tag::BeginSample { .. }) => {
                return Err(self.violation(MarkupViolation::NestedSample))
            }

            (State::Outside, Tag::EndSample) => {
                return Err(self.violation(MarkupViolation::EndOutsideSample))
            }
            (State::InSampleHidden(_), Tag::EndSample) => {
                return Err(self.violation(MarkupViolation::EndWhileHidden))
            }
            (State::InSample(record), Tag::EndSample) => {
                self.complete(record)?;
                State::Outside
            }

            (State::Outside, Tag::BeginHidden) => {
                return Err(self.violation(MarkupViolation::HiddenOutsideSample))
            }
            (State::InSampleHidden(_), Tag::BeginHidden) => {
                return Err(self.violation(MarkupViolation::NestedHidden))
            }
            (State::InSample(record), Tag::BeginHidden) => State::InSampleHidden(record),

            (State::InSampleHidden(record), Tag::EndHidden) => State::InSample(record),
            (_, Tag::EndHidden) => {
                return Err(self.violation(MarkupViolation::EndHiddenOutsideHidden))
            }

            (State::Outside, Tag::Title(_)) => {
                return Err(self.violation(MarkupViolation::TitleOutsideSample))
            }
            (State::Outside, Tag::Description(_)) => {
                return Err(self.violation(MarkupViolation::DescriptionOutsideSample))
            }
            (mut open, Tag::Title(text)) => {
                if let Some(record) = open.record_mut() {
                    record.set_title(text);
                }
                open
            }
            (mut open, Tag::Description(text)) => {
                if let Some(record) = open.record_mut() {
                    record.set_description(text);
                }
                open
            }

            (State::InSample(mut record), Tag::Text) => {
                record.append_line(line);
                State::InSample(record)
            }
            (other, Tag::Text) => other,
        };
        Ok(())
    }

    /// Completeness check at END_SAMPLE. Fields are reported in order:
    /// title, description, content.
    fn complete(&mut self, record: SampleRecord) -> Result<()> {
        let missing = if record.title().is_empty() {
            Some("title")
        } else if record.description().is_empty() {
            Some("description")
        } else if record.formatted_code().is_empty() {
            Some("content")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(SampleError::MissingField {
                field,
                file: self.file.clone(),
                line: self.line,
            });
        }
        self.samples.push(record);
        Ok(())
    }

    fn finish(self) -> Result<Vec<SampleRecord>> {
        match &self.state {
            State::Outside => Ok(self.samples),
            State::InSample(r) | State::InSampleHidden(r) => {
                Err(self.violation(MarkupViolation::UnclosedSample {
                    id: r.id().to_string(),
                }))
            }
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Scans source text for sample markup.
pub struct MarkupParser {
    patterns: TagPatterns,
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self {
            patterns: TagPatterns::new(DEFAULT_COMMENT_MARKER)
                .expect("default tag patterns are valid"),
        }
    }
}

impl MarkupParser {
    /// Build a parser whose tags follow `comment_marker` (e.g. `//` or `#`).
    pub fn new(comment_marker: &str) -> Result<Self> {
        if comment_marker.trim().is_empty() {
            return Err(SampleError::InvalidArgument(
                "Comment marker must be provided".to_string(),
            ));
        }
        Ok(Self {
            patterns: TagPatterns::new(comment_marker.trim())?,
        })
    }

    fn classify<'a>(&self, line: &'a str) -> Tag<'a> {
        let trimmed = line.trim();
        let p = &self.patterns;

        if let Some(caps) = p.begin_sample.captures(trimmed) {
            let service = caps.get(1).map_or("", |m| m.as_str());
            let id = caps.get(2).map_or("", |m| m.as_str());
            return Tag::BeginSample { service, id };
        }
        if p.end_sample.is_match(trimmed) {
            return Tag::EndSample;
        }
        if p.begin_hidden.is_match(trimmed) {
            return Tag::BeginHidden;
        }
        if p.end_hidden.is_match(trimmed) {
            return Tag::EndHidden;
        }
        if let Some(caps) = p.title.captures(trimmed) {
            return Tag::Title(caps.get(1).map_or("", |m| m.as_str()));
        }
        if let Some(caps) = p.description.captures(trimmed) {
            return Tag::Description(caps.get(1).map_or("", |m| m.as_str()));
        }
        Tag::Text
    }

    /// Parse in-memory text. `file_name` only labels error messages.
    pub fn parse_str(&self, file_name: &str, input: &str) -> Result<Vec<SampleRecord>> {
        let mut scan = Scan::new(self, file_name);
        for line in input.lines() {
            scan.feed(line)?;
        }
        scan.finish()
    }

    /// Parse a line stream read from `path`.
    ///
    /// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the
    /// file, so a stray Latin-1 header does not hide the samples below it.
    pub fn parse_reader<R: BufRead>(&self, path: &Path, mut reader: R) -> Result<Vec<SampleRecord>> {
        let mut scan = Scan::new(self, &display_name(path));
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| SampleError::io(path, e))?;
            if read == 0 {
                break;
            }
            let raw = buf
                .strip_suffix(b"\n")
                .map(|b| b.strip_suffix(b"\r").unwrap_or(b))
                .unwrap_or(&buf[..]);
            scan.feed(&String::from_utf8_lossy(raw))?;
        }
        scan.finish()
    }

    /// True when `line` would be read as a tag rather than code.
    pub fn is_tag(&self, line: &str) -> bool {
        self.classify(line) != Tag::Text
    }

    /// Parse one file regardless of its extension.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<SampleRecord>> {
        if !path.is_file() {
            return Err(SampleError::InvalidArgument(format!(
                "Must provide a valid existing file to parse: {}",
                path.display()
            )));
        }
        let file = File::open(path).map_err(|e| SampleError::io(path, e))?;
        self.parse_reader(path, BufReader::new(file))
    }
}

/// File name shown in diagnostics (last path component).
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
