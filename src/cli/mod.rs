//! CLI support for cumin-lang
//!
//! Provides programmatic access to the conversion command for embedding in
//! other tools, plus the document input adapters.

mod input;
mod run;

pub use input::{DocFormat, json_to_value, parse_document, yaml_to_value};
pub use run::{ConvertOptions, execute_convert};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Input document violates the data model (null values, non-string keys)
    Input(String),
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// Conversion error
    Convert(crate::ConvertError),
    /// IO error
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "Invalid input document: {}", msg),
            CliError::Yaml(e) => write!(f, "Invalid YAML: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Convert(e) => write!(f, "Conversion error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Yaml(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Convert(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Input(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Yaml(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<crate::ConvertError> for CliError {
    fn from(e: crate::ConvertError) -> Self {
        CliError::Convert(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
