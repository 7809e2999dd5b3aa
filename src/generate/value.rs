//! Renders example value trees as request-construction call chains.
//!
//! Each declared member kind has its own case:
//!
//! - simple    → literal, e.g. `"bucket"`, `true`, `42L`
//! - list      → comma-separated element expressions
//! - map       → one `.add<Field>Entry(key, value)` call per entry
//! - structure → `new <Shape>()` followed by chained setters

use super::model::{MemberModel, ScalarType, ServiceModel, ShapeModel};
use crate::error::{Result, SampleError};
use serde_json::{Map, Value};

/// Renders values against the shapes of one service model.
pub struct ValueRenderer<'m> {
    model: &'m ServiceModel,
    /// Appended to error messages, e.g. "operation PutObject, example 2".
    context: String,
}

impl<'m> ValueRenderer<'m> {
    pub fn new(model: &'m ServiceModel, context: impl Into<String>) -> Self {
        Self {
            model,
            context: context.into(),
        }
    }

    /// Chained call(s) that assign `value` to `field` on a builder.
    ///
    /// Maps expand to add-entry calls; everything else is one `.with<Field>(..)`.
    pub fn assignment(&self, field: &str, member: &MemberModel, value: &Value) -> Result<String> {
        match member {
            MemberModel::Map { key_type, value: value_member } => {
                self.map_entries(field, key_type, value_member, value)
            }
            _ => Ok(format!(
                ".with{}({})",
                first_char_to_upper(field),
                self.expression(field, member, value)?
            )),
        }
    }

    /// Fields of `object`, in order, resolved against `shape_name`.
    pub fn fields<'v>(
        &self,
        shape_name: &str,
        object: &'v Map<String, Value>,
    ) -> Result<Vec<(&'v str, &'m MemberModel, &'v Value)>> {
        let shape: &'m ShapeModel = self.model.shape(shape_name)?;
        object
            .iter()
            .map(|(name, value)| -> Result<_> {
                let member = shape.members.get(name).ok_or_else(|| SampleError::Lookup {
                    kind: "member",
                    name: name.clone(),
                    context: format!("shape {shape_name}, {}", self.context),
                })?;
                Ok((name.as_str(), member, value))
            })
            .collect()
    }

    fn expression(&self, field: &str, member: &MemberModel, value: &Value) -> Result<String> {
        match member {
            MemberModel::Simple { scalar } => Ok(scalar_literal(scalar, value)),
            MemberModel::List { member: element } => {
                let Value::Array(items) = value else {
                    return Err(self.mismatch(field, "expected a list"));
                };
                let rendered = items
                    .iter()
                    .map(|item| self.expression(field, element, item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(rendered.join(", "))
            }
            MemberModel::Map { .. } => {
                Err(self.mismatch(field, "a map cannot be used as a value expression"))
            }
            MemberModel::Structure { shape } => self.structure(field, shape, value),
        }
    }

    fn map_entries(
        &self,
        field: &str,
        key_type: &ScalarType,
        value_member: &MemberModel,
        value: &Value,
    ) -> Result<String> {
        let Value::Object(entries) = value else {
            return Err(self.mismatch(field, "expected a map"));
        };
        let method = format!(".add{}Entry", first_char_to_upper(field));
        let mut out = String::new();
        for (key, entry) in entries {
            let key = scalar_literal(key_type, &Value::String(key.clone()));
            let entry = self.expression(field, value_member, entry)?;
            out.push_str(&format!("{method}({key}, {entry})"));
        }
        Ok(out)
    }

    fn structure(&self, field: &str, shape: &str, value: &Value) -> Result<String> {
        let Value::Object(object) = value else {
            return Err(self.mismatch(field, "expected an object"));
        };
        let mut out = format!("new {shape}()");
        for (name, member, child) in self.fields(shape, object)? {
            out.push_str(&self.assignment(name, member, child)?);
        }
        Ok(out)
    }

    fn mismatch(&self, field: &str, reason: &str) -> SampleError {
        SampleError::Generation {
            field: field.to_string(),
            reason: reason.to_string(),
            context: self.context.clone(),
        }
    }
}

/// Literal for a scalar of the given type.
pub fn scalar_literal(scalar: &ScalarType, value: &Value) -> String {
    let text = value_text(value);
    match scalar {
        ScalarType::Text => format!("\"{}\"", escape_java(&text)),
        ScalarType::Boolean => text.to_lowercase(),
        ScalarType::Long => format!("{text}L"),
        ScalarType::Other(_) => text,
    }
}

/// Plain text of a JSON value: strings unquoted, containers as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape text for a double-quoted Java string literal.
pub fn escape_java(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }
    out
}

pub fn first_char_to_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> ServiceModel {
        ServiceModel::from_json(
            r#"{
            "metadata": { "syncInterface": "AmazonFoo", "syncClient": "AmazonFooClient", "packageName": "com.example.foo" },
            "shapes": {
                "Owner": { "members": {
                    "Name": { "kind": "simple", "type": "String" },
                    "Labels": { "kind": "map", "keyType": "String", "value": { "kind": "simple", "type": "String" } }
                } },
                "Grant": { "members": {
                    "Owner": { "kind": "structure", "shape": "Owner" },
                    "Permission": { "kind": "simple", "type": "String" }
                } }
            }
        }"#,
        )
        .unwrap()
    }

    fn simple(name: &str) -> MemberModel {
        MemberModel::Simple {
            scalar: ScalarType::from(name.to_string()),
        }
    }

    #[test]
    fn scalar_literals_by_type() {
        assert_eq!(scalar_literal(&ScalarType::Text, &json!("a\"b")), "\"a\\\"b\"");
        assert_eq!(scalar_literal(&ScalarType::Boolean, &json!(true)), "true");
        assert_eq!(scalar_literal(&ScalarType::Boolean, &json!("TRUE")), "true");
        assert_eq!(scalar_literal(&ScalarType::Long, &json!(42)), "42L");
        assert_eq!(
            scalar_literal(&ScalarType::Other("Integer".into()), &json!(7)),
            "7"
        );
        assert_eq!(scalar_literal(&ScalarType::Text, &json!(12)), "\"12\"");
    }

    #[test]
    fn escape_java_handles_controls_and_unicode() {
        assert_eq!(escape_java("a\\b\n\tc"), "a\\\\b\\n\\tc");
        assert_eq!(escape_java("é"), "\\u00E9");
        assert_eq!(escape_java("😀"), "\\uD83D\\uDE00");
        assert_eq!(escape_java("plain text/ok"), "plain text/ok");
    }

    #[test]
    fn first_char_upper() {
        assert_eq!(first_char_to_upper("bucket"), "Bucket");
        assert_eq!(first_char_to_upper("Key"), "Key");
        assert_eq!(first_char_to_upper(""), "");
    }

    #[test]
    fn scalar_assignment() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        assert_eq!(
            r.assignment("bucket", &simple("String"), &json!("examplebucket"))
                .unwrap(),
            ".withBucket(\"examplebucket\")"
        );
    }

    #[test]
    fn list_assignment_is_one_call() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        let member = MemberModel::List {
            member: Box::new(simple("String")),
        };
        assert_eq!(
            r.assignment("Keys", &member, &json!(["a", "b"])).unwrap(),
            ".withKeys(\"a\", \"b\")"
        );
    }

    #[test]
    fn list_of_structures() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        let member = MemberModel::List {
            member: Box::new(MemberModel::Structure {
                shape: "Owner".into(),
            }),
        };
        assert_eq!(
            r.assignment("Owners", &member, &json!([{"Name": "a"}, {"Name": "b"}]))
                .unwrap(),
            ".withOwners(new Owner().withName(\"a\"), new Owner().withName(\"b\"))"
        );
    }

    #[test]
    fn map_assignment_is_one_call_per_entry() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        let member = MemberModel::Map {
            key_type: ScalarType::Text,
            value: Box::new(simple("Long")),
        };
        assert_eq!(
            r.assignment("Limits", &member, &json!({"b": 2, "a": 1}))
                .unwrap(),
            ".addLimitsEntry(\"b\", 2L).addLimitsEntry(\"a\", 1L)"
        );
    }

    #[test]
    fn nested_structures_recurse_in_key_order() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        let member = MemberModel::Structure {
            shape: "Grant".into(),
        };
        let value = json!({
            "Permission": "READ",
            "Owner": { "Labels": { "team": "docs" }, "Name": "alice" }
        });
        assert_eq!(
            r.assignment("Grant", &member, &value).unwrap(),
            ".withGrant(new Grant().withPermission(\"READ\").withOwner(new Owner()\
             .addLabelsEntry(\"team\", \"docs\").withName(\"alice\")))"
        );
    }

    #[test]
    fn unknown_member_is_lookup_failure() {
        let m = model();
        let r = ValueRenderer::new(&m, "operation X, example 1");
        let member = MemberModel::Structure {
            shape: "Owner".into(),
        };
        let err = r
            .assignment("Owner", &member, &json!({"Bogus": 1}))
            .unwrap_err();
        assert!(matches!(err, SampleError::Lookup { kind: "member", .. }));
        assert!(err.to_string().contains("operation X, example 1"));
    }

    #[test]
    fn shape_mismatch_is_generation_error() {
        let m = model();
        let r = ValueRenderer::new(&m, "test");
        let member = MemberModel::List {
            member: Box::new(simple("String")),
        };
        let err = r.assignment("Keys", &member, &json!("nope")).unwrap_err();
        assert!(matches!(err, SampleError::Generation { .. }));
    }
}
