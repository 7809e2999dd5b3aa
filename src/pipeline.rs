//! Batch entry points behind the CLI subcommands.

use crate::config::{ExtractConfig, GenerateConfig, ShowConfig};
use crate::error::Result;
use crate::generate::{write_generated_class, SampleGenerator, ServiceModel, GENERATED_EXTENSION};
use crate::parser::{collect_source_files, extract_samples, MarkupParser};
use crate::render::{create_renderer, SampleRef};
use crate::store::{write_samples, SampleReader};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of an extraction run.
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub files: usize,
    pub samples: usize,
    /// One document per service, in first-seen order.
    pub documents: Vec<PathBuf>,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub classes: Vec<PathBuf>,
    /// Models that carried no examples.
    pub skipped: Vec<PathBuf>,
    pub extracted: Option<ExtractReport>,
}

/// Scan sources for tagged samples and write one document per service.
pub fn extract(config: &ExtractConfig) -> Result<ExtractReport> {
    config.validate()?;
    let parser = MarkupParser::new(&config.comment_marker)?;
    let files = collect_source_files(&config.source_dirs, config.bare_extension())?;
    debug!(files = files.len(), "collected source files");

    let samples = extract_samples(&parser, &files)?;
    let documents = write_samples(&samples, &config.output_dir)?;
    Ok(ExtractReport {
        files: files.len(),
        samples: samples.len(),
        documents,
    })
}

/// Generate a tagged sample class for each model, optionally extracting them.
pub fn generate(config: &GenerateConfig) -> Result<GenerateReport> {
    config.validate()?;
    let mut report = GenerateReport::default();

    for path in &config.models {
        let model = ServiceModel::from_path(path)?;
        if !model.has_examples() {
            info!(model = %path.display(), "no examples, skipping");
            report.skipped.push(path.clone());
            continue;
        }
        let generator = SampleGenerator::new(&model);
        let source = generator.generate()?;
        let written = write_generated_class(&config.output_dir, &generator.service_name(), &source)?;
        report.classes.push(written);
    }

    if let Some(dir) = &config.extract_to {
        if report.classes.is_empty() {
            warn!("no sample classes were generated, nothing to extract");
        } else {
            let sources = report
                .classes
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            let extract_config = ExtractConfig::new(sources, GENERATED_EXTENSION, dir.clone());
            report.extracted = Some(extract(&extract_config)?);
        }
    }
    Ok(report)
}

/// Look up each reference and render the found samples.
///
/// Malformed references and absent samples are skipped with a warning. A
/// document that cannot be decoded aborts.
pub fn show(config: &ShowConfig) -> Result<String> {
    config.validate()?;
    let renderer = create_renderer(&config.format)?;
    let reader = SampleReader::new(&config.samples_dir)?;

    let mut samples = Vec::new();
    for text in &config.references {
        let reference = match SampleRef::parse(text) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping reference: {e}");
                continue;
            }
        };
        match reader.read_sample(&reference.service, &reference.id)? {
            Some(sample) => samples.push(sample),
            None => warn!(reference = %reference, "sample not found, skipping"),
        }
    }
    Ok(renderer.render(&samples))
}
