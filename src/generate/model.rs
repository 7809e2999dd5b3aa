//! Service model consumed by the generator.
//!
//! Decoded from JSON. Maps keep document order, so operations, shapes and
//! example fields are visited in the order they were written.

use crate::error::{Result, SampleError};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
    pub metadata: Metadata,
    #[serde(default)]
    pub operations: IndexMap<String, OperationModel>,
    #[serde(default)]
    pub shapes: IndexMap<String, ShapeModel>,
    /// Examples keyed by operation name.
    #[serde(default)]
    pub examples: IndexMap<String, Vec<Example>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Client interface name; also the service name used in sample tags.
    pub sync_interface: String,
    pub sync_client: String,
    pub package_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationModel {
    pub method_name: String,
    pub input_type: String,
    #[serde(default)]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeModel {
    #[serde(default)]
    pub members: IndexMap<String, MemberModel>,
}

/// Declared kind of a shape member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MemberModel {
    Simple {
        #[serde(rename = "type")]
        scalar: ScalarType,
    },
    List {
        member: Box<MemberModel>,
    },
    Map {
        #[serde(rename = "keyType")]
        key_type: ScalarType,
        value: Box<MemberModel>,
    },
    Structure {
        shape: String,
    },
}

/// Primitive type of a scalar member, as far as literal syntax cares.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ScalarType {
    Text,
    Boolean,
    Long,
    Other(String),
}

impl From<String> for ScalarType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "String" => Self::Text,
            "Boolean" => Self::Boolean,
            "Long" => Self::Long,
            _ => Self::Other(name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub comments: ExampleComments,
    /// Request field values.
    #[serde(default)]
    pub input: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExampleComments {
    /// Comment per top-level request field.
    #[serde(default)]
    pub input: IndexMap<String, String>,
}

impl ServiceModel {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| SampleError::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SampleError::Model {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn service_name(&self) -> &str {
        &self.metadata.sync_interface
    }

    pub fn operation(&self, name: &str) -> Result<&OperationModel> {
        self.operations.get(name).ok_or_else(|| SampleError::Lookup {
            kind: "operation",
            name: name.to_string(),
            context: format!("service {}", self.service_name()),
        })
    }

    pub fn shape(&self, name: &str) -> Result<&ShapeModel> {
        self.shapes.get(name).ok_or_else(|| SampleError::Lookup {
            kind: "shape",
            name: name.to_string(),
            context: format!("service {}", self.service_name()),
        })
    }

    pub fn has_examples(&self) -> bool {
        self.examples.values().any(|e| !e.is_empty())
    }
}
