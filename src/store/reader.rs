//! Retrieves a single sample from a stored per-service document.
//!
//! The document is decoded as a stream: entries are visited one at a time and
//! only the requested one is kept.

use super::{check_service_name, document_path, SampleEntry, ROOT_KEY};
use crate::error::{require_non_empty, Result, SampleError};
use crate::model::RetrievedSample;
use serde::de::{DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Reads samples out of a directory of per-service documents.
#[derive(Debug, Clone)]
pub struct SampleReader {
    sample_dir: PathBuf,
}

impl SampleReader {
    pub fn new(sample_dir: impl Into<PathBuf>) -> Result<Self> {
        let sample_dir = sample_dir.into();
        if sample_dir.as_os_str().is_empty() {
            return Err(SampleError::InvalidArgument(
                "Sample directory must be provided".to_string(),
            ));
        }
        Ok(Self { sample_dir })
    }

    pub fn sample_dir(&self) -> &Path {
        &self.sample_dir
    }

    /// Look up `id` in the document for `service`.
    ///
    /// `Ok(None)` covers three quiet cases: the service has no document, the
    /// document has no such entry, or the entry is incomplete. A document that
    /// exists but cannot be decoded is an error.
    pub fn read_sample(&self, service: &str, id: &str) -> Result<Option<RetrievedSample>> {
        require_non_empty(service, "Sample service name must be provided")?;
        require_non_empty(id, "Sample ID must be provided")?;
        check_service_name(service)?;

        let path = document_path(&self.sample_dir, service);
        let file = match File::open(&path) {
            Ok(file) => file,
            // No document: the service has no samples yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SampleError::io(path, e)),
        };

        let entry = find_entry(BufReader::new(file), id).map_err(|source| {
            SampleError::Retrieval {
                service: service.to_string(),
                id: id.to_string(),
                source,
            }
        })?;

        let Some(SampleEntry {
            id: Some(found_id),
            title: Some(title),
            description: Some(description),
            content: Some(content),
        }) = entry
        else {
            return Ok(None);
        };
        if [&found_id, &title, &description, &content]
            .iter()
            .any(|s| s.is_empty())
        {
            return Ok(None);
        }

        RetrievedSample::new(found_id, service, title, description, content).map(Some)
    }
}

/// Stream `reader` and return the first entry whose id equals `id`.
pub fn find_entry<R: Read>(reader: R, id: &str) -> serde_json::Result<Option<SampleEntry>> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let found = FindInDocument { id }.deserialize(&mut de)?;
    de.end()?;
    Ok(found)
}

struct FindInDocument<'a> {
    id: &'a str,
}

impl<'de> DeserializeSeed<'de> for FindInDocument<'_> {
    type Value = Option<SampleEntry>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for FindInDocument<'_> {
    type Value = Option<SampleEntry>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sample document object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut found = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == ROOT_KEY && found.is_none() {
                found = map.next_value_seed(FindInEntries { id: self.id })?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found)
    }
}

struct FindInEntries<'a> {
    id: &'a str,
}

impl<'de> DeserializeSeed<'de> for FindInEntries<'_> {
    type Value = Option<SampleEntry>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for FindInEntries<'_> {
    type Value = Option<SampleEntry>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of sample entries")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut found = None;
        while let Some(entry) = seq.next_element::<SampleEntry>()? {
            if found.is_none() && entry.id.as_deref() == Some(self.id) {
                found = Some(entry);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SERVICE: &str = "TestService";

    const DOC: &str = r#"{
  "codeSamples": [
    { "id": "FooSample", "title": "Foo Sample", "description": "A foo sample!", "content": "String foo = \"foo!\";" },
    { "id": "MissingTitleSample", "description": "d", "content": "c" },
    { "id": "EmptyTitleSample", "title": "", "description": "d", "content": "c" },
    { "id": "MissingDescriptionSample", "title": "t", "content": "c" },
    { "id": "EmptyDescriptionSample", "title": "t", "description": "", "content": "c" },
    { "id": "MissingContentSample", "title": "t", "description": "d" },
    { "id": "EmptyContentSample", "title": "t", "description": "d", "content": "" },
    { "id": "FooSample", "title": "Duplicate", "description": "d", "content": "c" }
  ]
}"#;

    fn reader() -> (TempDir, SampleReader) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(format!("{SERVICE}.json")), DOC).unwrap();
        let reader = SampleReader::new(dir.path()).unwrap();
        (dir, reader)
    }

    #[test]
    fn retrieves_valid_sample() {
        let (_dir, reader) = reader();
        let sample = reader.read_sample(SERVICE, "FooSample").unwrap().unwrap();
        assert_eq!(sample.id(), "FooSample");
        assert_eq!(sample.service(), SERVICE);
        assert_eq!(sample.title(), "Foo Sample");
        assert_eq!(sample.description(), "A foo sample!");
        assert_eq!(sample.content(), "String foo = \"foo!\";");
    }

    #[test]
    fn empty_arguments_are_invalid() {
        let (_dir, reader) = reader();
        assert!(matches!(
            reader.read_sample("", "FooSample"),
            Err(SampleError::InvalidArgument(_))
        ));
        assert!(matches!(
            reader.read_sample(SERVICE, ""),
            Err(SampleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_sample_dir_is_invalid() {
        assert!(matches!(
            SampleReader::new(""),
            Err(SampleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_sample_is_none() {
        let (_dir, reader) = reader();
        assert!(reader.read_sample(SERVICE, "BogusSample").unwrap().is_none());
    }

    #[test]
    fn missing_document_is_none() {
        let (_dir, reader) = reader();
        assert!(reader.read_sample("NoSuchService", "FooSample").unwrap().is_none());
    }

    #[test]
    fn incomplete_samples_are_none() {
        let (_dir, reader) = reader();
        for id in [
            "MissingTitleSample",
            "EmptyTitleSample",
            "MissingDescriptionSample",
            "EmptyDescriptionSample",
            "MissingContentSample",
            "EmptyContentSample",
        ] {
            assert!(reader.read_sample(SERVICE, id).unwrap().is_none(), "{id}");
        }
    }

    #[test]
    fn corrupt_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Broken.json"), "{ \"codeSamples\": [ { ").unwrap();
        let reader = SampleReader::new(dir.path()).unwrap();
        let err = reader.read_sample("Broken", "Foo").unwrap_err();
        assert!(matches!(err, SampleError::Retrieval { .. }));
        assert!(err.to_string().contains("Service Name: Broken, Sample ID: Foo"));
    }

    #[test]
    fn find_entry_skips_unrelated_keys() {
        let doc = r#"{ "version": [1, 2, {"x": null}], "codeSamples": [ { "id": "A", "title": "t" } ] }"#;
        let entry = find_entry(doc.as_bytes(), "A").unwrap().unwrap();
        assert_eq!(entry.title.as_deref(), Some("t"));
        assert!(find_entry(doc.as_bytes(), "B").unwrap().is_none());
    }

    #[test]
    fn service_with_path_separator_is_invalid() {
        let (dir, reader) = reader();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a/b.json"), DOC).unwrap();
        for service in ["a/b", "a\\b", "../TestService"] {
            assert!(
                matches!(
                    reader.read_sample(service, "FooSample"),
                    Err(SampleError::InvalidArgument(_))
                ),
                "{service}"
            );
        }
    }
}
