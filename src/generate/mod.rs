//! Generates tagged sample source from a service model's examples.
//!
//! The output is one Java class per service. Every (operation, example) pair
//! becomes a method whose body is a complete sample block, so the file can be
//! fed straight back into extraction.

pub mod model;
pub mod value;

pub use model::ServiceModel;

use crate::error::{Result, SampleError};
use crate::parser::{MarkupParser, DEFAULT_COMMENT_MARKER};
use model::Example;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use value::ValueRenderer;

/// Extension of generated source files.
pub const GENERATED_EXTENSION: &str = "java";

const METHOD_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const CHAIN_INDENT: &str = "                ";

pub struct SampleGenerator<'m> {
    model: &'m ServiceModel,
    /// Reads generated comment lines the way extraction will.
    markup: MarkupParser,
}

impl<'m> SampleGenerator<'m> {
    pub fn new(model: &'m ServiceModel) -> Self {
        Self {
            model,
            markup: MarkupParser::default(),
        }
    }

    /// Service name used in sample tags and the class name.
    pub fn service_name(&self) -> String {
        class_safe(self.model.service_name())
    }

    /// Render the whole samples class.
    pub fn generate(&self) -> Result<String> {
        let service = self.service_name();
        if service.is_empty() || service.contains('.') {
            return Err(SampleError::InvalidArgument(format!(
                "Service name must be non-empty and contain no '.': {:?}",
                self.model.service_name()
            )));
        }
        let package = &self.model.metadata.package_name;

        let mut out = String::new();
        out.push_str(&format!("import {package}.*;\n"));
        out.push_str(&format!("import {package}.model.*;\n\n"));
        out.push_str(&format!("public class {service}GeneratedSamples {{\n"));

        for (operation, examples) in &self.model.examples {
            for (i, example) in examples.iter().enumerate() {
                out.push('\n');
                self.emit_example(&mut out, &service, operation, i + 1, example)?;
            }
        }

        out.push_str("}\n");
        Ok(out)
    }

    fn emit_example(
        &self,
        out: &mut String,
        service: &str,
        operation_name: &str,
        number: usize,
        example: &Example,
    ) -> Result<()> {
        let context = format!("operation {operation_name}, example {number}");
        let operation = self.model.operation(operation_name)?;
        let title = single_line(&example.title);
        let description = single_line(&example.description);
        for (field, text) in [("title", &title), ("description", &description)] {
            if text.trim().is_empty() {
                return Err(SampleError::Generation {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                    context,
                });
            }
        }

        let marker = DEFAULT_COMMENT_MARKER;
        let metadata = &self.model.metadata;
        out.push_str(&format!(
            "{METHOD_INDENT}public void {operation_name}_{number}() {{\n"
        ));
        push_body_line(
            out,
            &format!("{marker}BEGIN_SAMPLE:{service}.{}", sample_id(operation_name, number)),
        );
        push_body_line(out, &format!("{marker}TITLE:{title}"));
        push_body_line(out, &format!("{marker}DESCRIPTION:{description}"));
        push_body_line(
            out,
            &format!(
                "{} client = new {}();",
                metadata.sync_interface, metadata.sync_client
            ),
        );

        let input_type = &operation.input_type;
        let chain = self.request_chain(input_type, example, &context)?;
        if chain.is_empty() {
            push_body_line(out, &format!("{input_type} request = new {input_type}();"));
        } else {
            push_body_line(out, &format!("{input_type} request = new {input_type}()"));
            out.push_str(&chain.join("\n"));
            out.push_str(";\n");
        }

        match &operation.return_type {
            Some(return_type) => push_body_line(
                out,
                &format!(
                    "{return_type} response = client.{}(request);",
                    operation.method_name
                ),
            ),
            None => push_body_line(out, &format!("client.{}(request);", operation.method_name)),
        }
        push_body_line(out, &format!("{marker}END_SAMPLE"));
        out.push_str(&format!("{METHOD_INDENT}}}\n"));
        Ok(())
    }

    /// One line per chained call, each field's comment lines first.
    fn request_chain(
        &self,
        input_type: &str,
        example: &Example,
        context: &str,
    ) -> Result<Vec<String>> {
        let fields = match &example.input {
            Value::Null => return Ok(Vec::new()),
            Value::Object(fields) => fields,
            _ => {
                return Err(SampleError::Generation {
                    field: "input".to_string(),
                    reason: "expected an object".to_string(),
                    context: context.to_string(),
                })
            }
        };

        let renderer = ValueRenderer::new(self.model, context);
        let mut lines = Vec::new();
        for (name, member, value) in renderer.fields(input_type, fields)? {
            if let Some(comment) = example.comments.input.get(name) {
                for text in comment.lines() {
                    let line = format!("{CHAIN_INDENT}{DEFAULT_COMMENT_MARKER}{text}");
                    if self.markup.is_tag(&line) {
                        return Err(SampleError::Generation {
                            field: name.to_string(),
                            reason: format!("comment {text:?} would be read as a sample tag"),
                            context: context.to_string(),
                        });
                    }
                    lines.push(line);
                }
            }
            lines.push(format!(
                "{CHAIN_INDENT}{}",
                renderer.assignment(name, member, value)?
            ));
        }
        Ok(lines)
    }
}

/// Sample id for the `number`th (1-based) example of an operation. The first
/// example carries the bare operation name so `Service.Operation` resolves.
pub fn sample_id(operation: &str, number: usize) -> String {
    if number == 1 {
        operation.to_string()
    } else {
        format!("{operation}_{number}")
    }
}

/// Write generated source as `<dir>/<Service>GeneratedSamples.java`.
pub fn write_generated_class(output_dir: &Path, service_name: &str, source: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| SampleError::io(output_dir, e))?;
    let path = output_dir.join(format!(
        "{}GeneratedSamples.{GENERATED_EXTENSION}",
        class_safe(service_name)
    ));
    fs::write(&path, source).map_err(|e| SampleError::io(&path, e))?;
    info!(service = %service_name, path = %path.display(), "wrote generated samples");
    Ok(path)
}

fn push_body_line(out: &mut String, text: &str) {
    out.push_str(BODY_INDENT);
    out.push_str(text);
    out.push('\n');
}

fn class_safe(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Fold line breaks so the text fits on one tag line. Single-line text is
/// returned as is.
fn single_line(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
