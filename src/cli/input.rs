//! Document input adapters: YAML/JSON text to the core `Value` tree.
//!
//! The adapters enforce the data model at the boundary: mapping keys must
//! be strings, and null values are rejected because the target language
//! has no null.

use std::path::Path;

use crate::Value;
use super::CliError;

/// Input document format, picked from the file extension (`.json` is JSON,
/// anything else is YAML).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Yaml,
    Json,
}

impl DocFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DocFormat::Json,
            _ => DocFormat::Yaml,
        }
    }
}

/// Parse document text in the given format into a `Value` tree.
pub fn parse_document(text: &str, format: DocFormat) -> Result<Value, CliError> {
    match format {
        DocFormat::Yaml => {
            let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
            yaml_to_value(doc)
        }
        DocFormat::Json => {
            let doc: serde_json::Value = serde_json::from_str(text)?;
            json_to_value(doc)
        }
    }
}

/// Convert a serde_yaml value to a core Value
pub fn yaml_to_value(v: serde_yaml::Value) -> Result<Value, CliError> {
    match v {
        serde_yaml::Value::Null => Err(CliError::Input(
            "null values are not supported".to_string(),
        )),
        serde_yaml::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(CliError::Input(format!("unrepresentable number: {}", n)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => Ok(Value::Sequence(
            seq.into_iter().map(yaml_to_value).collect::<Result<_, _>>()?,
        )),
        serde_yaml::Value::Mapping(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, value) in map {
                let serde_yaml::Value::String(key) = key else {
                    return Err(CliError::Input(
                        "mapping keys must be strings".to_string(),
                    ));
                };
                pairs.push((key, yaml_to_value(value)?));
            }
            Ok(Value::Mapping(pairs))
        }
        serde_yaml::Value::Tagged(tagged) => Err(CliError::Input(format!(
            "tagged values are not supported: {}",
            tagged.tag
        ))),
    }
}

/// Convert a serde_json value to a core Value
///
/// Relies on serde_json's `preserve_order` feature so object entries come
/// back in document order.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Err(CliError::Input(
            "null values are not supported".to_string(),
        )),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(CliError::Input(format!("unrepresentable number: {}", n)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(arr) => Ok(Value::Sequence(
            arr.into_iter().map(json_to_value).collect::<Result<_, _>>()?,
        )),
        serde_json::Value::Object(obj) => {
            let mut pairs = Vec::with_capacity(obj.len());
            for (key, value) in obj {
                pairs.push((key, json_to_value(value)?));
            }
            Ok(Value::Mapping(pairs))
        }
    }
}
