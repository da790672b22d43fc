//! The conversion pipeline: constant extraction, then top-level rendering.

use crate::{
    constants::{ConstantTable, GLOBAL_PREFIX},
    render::{RenderError, Renderer},
    value::Value,
};

/// Errors that can occur while converting a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The top level of the document is not a mapping
    TopLevelNotMapping(&'static str),
    /// Rendering failed (expression evaluation or nesting depth)
    Render(RenderError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::TopLevelNotMapping(kind) => {
                write!(f, "top level of the document must be a mapping, found {}", kind)
            }
            ConvertError::Render(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Render(e) => Some(e),
            ConvertError::TopLevelNotMapping(_) => None,
        }
    }
}

impl From<RenderError> for ConvertError {
    fn from(e: RenderError) -> Self {
        ConvertError::Render(e)
    }
}

/// Convert a full document into the target language.
///
/// The pipeline runs in one direction: the top-level mapping is scanned
/// once for `global ` constants, then every remaining entry is rendered in
/// document order. Mapping-valued entries are emitted as anonymous blocks
/// with their key dropped (top-level blocks in the target grammar have no
/// names); every other entry keeps its key.
///
/// The first evaluation or depth error aborts the whole conversion; no
/// partial output is produced.
///
/// # Examples
///
/// ```
/// use cumin_lang::{convert, Value};
///
/// let doc = Value::Mapping(vec![
///     ("global x".to_string(), Value::Integer(10)),
///     ("global y".to_string(), Value::Integer(5)),
///     ("config".to_string(), Value::Mapping(vec![
///         ("result".to_string(), Value::String("@[+ x y]".to_string())),
///     ])),
/// ]);
///
/// assert_eq!(convert(&doc).unwrap(), "{\n    result : 15;\n}");
/// ```
pub fn convert(doc: &Value) -> Result<String, ConvertError> {
    let Some(pairs) = doc.as_mapping() else {
        return Err(ConvertError::TopLevelNotMapping(doc.kind()));
    };

    let constants = ConstantTable::build(pairs);
    let renderer = Renderer::new(&constants);

    let mut lines = Vec::new();
    for (key, value) in pairs {
        if key.starts_with(GLOBAL_PREFIX) {
            continue; // consumed into the constant table
        }
        match value {
            Value::Mapping(_) => lines.push(renderer.render(value, 1, false)?),
            _ => lines.push(format!("{} : {}", key, renderer.render(value, 1, true)?)),
        }
    }

    Ok(lines.join("\n"))
}
