//! Groups parsed samples by service and writes one document per service.

use super::{check_service_name, document_path, SampleEntry};
use crate::error::{Result, SampleError};
use crate::model::SampleRecord;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// All samples belonging to one service, in input order.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SampleDocument {
    #[serde(rename = "codeSamples")]
    pub samples: Vec<SampleEntry>,
}

impl SampleDocument {
    pub fn push(&mut self, record: &SampleRecord) {
        self.samples.push(SampleEntry {
            id: Some(record.id().to_string()),
            title: Some(record.title().to_string()),
            description: Some(record.description().to_string()),
            content: Some(record.formatted_code()),
        });
    }
}

/// Services in first-seen order, each with its samples in input order.
pub fn group_by_service(samples: &[SampleRecord]) -> IndexMap<String, SampleDocument> {
    let mut docs: IndexMap<String, SampleDocument> = IndexMap::new();
    for record in samples {
        docs.entry(record.service().to_string())
            .or_default()
            .push(record);
    }
    docs
}

/// Write one document per service into `output_dir`, creating it if needed.
/// Returns the written paths in service order.
///
/// Documents written before a failure stay on disk.
pub fn write_samples(samples: &[SampleRecord], output_dir: &Path) -> Result<Vec<PathBuf>> {
    if output_dir.as_os_str().is_empty() {
        return Err(SampleError::InvalidArgument(
            "Sample output directory must be provided".to_string(),
        ));
    }
    let docs = group_by_service(samples);

    fs::create_dir_all(output_dir).map_err(|e| SampleError::io(output_dir, e))?;

    let mut written = Vec::with_capacity(docs.len());
    for (service, doc) in &docs {
        check_service_name(service)?;
        let path = document_path(output_dir, service);
        write_document(&path, doc)?;
        info!(service = %service, samples = doc.samples.len(), path = %path.display(), "wrote sample document");
        written.push(path);
    }
    Ok(written)
}

fn write_document(path: &Path, doc: &SampleDocument) -> Result<()> {
    let file = File::create(path).map_err(|e| SampleError::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, doc).map_err(|e| SampleError::io(path, e.into()))?;
    out.write_all(b"\n")
        .and_then(|_| out.flush())
        .map_err(|e| SampleError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ROOT_KEY;
    use tempfile::TempDir;

    fn record(service: &str, id: &str) -> SampleRecord {
        let mut r = SampleRecord::new(id, service).unwrap();
        r.set_title(format!("{id} title"));
        r.set_description(format!("{id} description"));
        r.append_line("    foo();");
        r
    }

    #[test]
    fn groups_in_first_seen_order() {
        let samples = vec![
            record("Test2", "A"),
            record("Test1", "B"),
            record("Test2", "C"),
        ];
        let docs = group_by_service(&samples);
        let services: Vec<_> = docs.keys().cloned().collect();
        assert_eq!(services, vec!["Test2", "Test1"]);
        let ids: Vec<_> = docs["Test2"]
            .samples
            .iter()
            .map(|e| e.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(docs["Test1"].samples[0].content.as_deref(), Some("foo();"));
    }

    #[test]
    fn writes_one_file_per_service() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/samples");
        let samples = vec![record("Test1", "Sample1"), record("Test2", "Sample2")];

        let written = write_samples(&samples, &out).unwrap();
        assert_eq!(written.len(), 2);
        assert!(out.join("Test1.json").is_file());
        assert!(out.join("Test2.json").is_file());

        let raw = fs::read_to_string(out.join("Test1.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entries = value[ROOT_KEY].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], "Sample1");
        assert_eq!(entries[0]["title"], "Sample1 title");
    }

    #[test]
    fn no_samples_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let written = write_samples(&[], dir.path()).unwrap();
        assert!(written.is_empty());
    }

    #[test]
    fn rejects_separator_in_service() {
        let dir = TempDir::new().unwrap();
        let err = write_samples(&[record("a/b", "X")], dir.path()).unwrap_err();
        assert!(matches!(err, SampleError::InvalidArgument(_)));
    }
}
