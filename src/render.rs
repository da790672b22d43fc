//! Serialization of document trees into the target configuration language.
//!
//! The target grammar is brace-and-semicolon:
//!
//! ```text
//! block      := "{" NEWLINE entry* "}"
//! entry      := INDENT (key ":")? value NEWLINE
//! value      := block | quoted-string ";" | bare-scalar ";"
//! ```
//!
//! Mappings and sequences both render as blocks; sequences simply have no
//! keys. Scalars end in `;`, strings are quoted and trimmed, and string
//! scalars carrying the `@[...]` marker are computed against the constant
//! table before rendering.

use crate::{constants::ConstantTable, evaluator::{EvalError, Evaluator}, value::Value};

/// Maximum nesting depth before rendering is aborted with a typed error
/// instead of exhausting the stack.
pub const MAX_DEPTH: usize = 64;

const INDENT: &str = "    ";

/// Errors that can occur while rendering a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// An embedded expression failed to evaluate
    Eval(EvalError),
    /// The tree nests deeper than [`MAX_DEPTH`]
    DepthExceeded(usize),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Eval(e) => write!(f, "{}", e),
            RenderError::DepthExceeded(limit) => {
                write!(f, "document nests deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Eval(e) => Some(e),
            RenderError::DepthExceeded(_) => None,
        }
    }
}

impl From<EvalError> for RenderError {
    fn from(e: EvalError) -> Self {
        RenderError::Eval(e)
    }
}

/// Renders document nodes against a fixed constant table.
pub struct Renderer<'a> {
    evaluator: Evaluator<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(constants: &'a ConstantTable) -> Self {
        Renderer {
            evaluator: Evaluator::new(constants),
        }
    }

    /// Render one node at the given nesting depth.
    ///
    /// `depth` is the indentation level of a block's entry lines; the
    /// block's closing brace sits one level shallower, so a block rendered
    /// at depth 1 closes at column 0. `_is_entry` marks a bare top-level
    /// scalar as opposed to one nested inside a block; the two currently
    /// render identically, the flag is threaded through so the grammar can
    /// diverge later without an interface change.
    pub fn render(&self, value: &Value, depth: usize, _is_entry: bool) -> Result<String, RenderError> {
        if depth > MAX_DEPTH {
            return Err(RenderError::DepthExceeded(MAX_DEPTH));
        }

        match value {
            Value::String(s) => match self.evaluator.resolve(s)? {
                Some(computed) => Ok(format!("{};", render_scalar(&computed))),
                None => Ok(format!("\"{}\";", s.trim())),
            },
            Value::Mapping(pairs) => {
                let indent = INDENT.repeat(depth);
                let mut lines = Vec::with_capacity(pairs.len());
                for (key, entry_value) in pairs {
                    let rendered = self.render(entry_value, depth + 1, false)?;
                    lines.push(format!("{}{} : {}", indent, key, rendered));
                }
                Ok(close_block(lines, depth))
            }
            Value::Sequence(items) => {
                let indent = INDENT.repeat(depth);
                let mut lines = Vec::with_capacity(items.len());
                for item in items {
                    let rendered = self.render(item, depth + 1, false)?;
                    lines.push(format!("{}{}", indent, rendered));
                }
                Ok(close_block(lines, depth))
            }
            scalar => Ok(format!("{};", render_scalar(scalar))),
        }
    }
}

/// Bare scalar text, without the trailing `;`.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Computed values are always scalar; collections never reach here.
        other => other.kind().to_string(),
    }
}

fn close_block(lines: Vec<String>, depth: usize) -> String {
    let closing = INDENT.repeat(depth.saturating_sub(1));
    format!("{{\n{}\n{}}}", lines.join("\n"), closing)
}
