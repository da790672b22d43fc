/// A document node in the source tree handed to the converter.
///
/// This type represents a parsed YAML/JSON-like document. Mappings are kept
/// as ordered key/value pairs rather than a hash map because the output
/// grammar emits entries in document order.
///
/// There is deliberately no `Null` variant: the target language has no null,
/// so the input adapters reject null values before the core sees them.
///
/// # Examples
///
/// ```
/// use cumin_lang::Value;
///
/// // Scalar values
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let sequence = Value::Sequence(vec![Value::Integer(1), Value::Integer(2)]);
/// let mapping = Value::Mapping(vec![
///     ("key".to_string(), Value::String("value".to_string())),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string (may carry an embedded `@[...]` expression)
    String(String),

    /// Ordered sequence of values
    Sequence(Vec<Value>),

    /// Ordered mapping with string keys, unique per level
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Human-readable name of the node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Get the mapping pairs, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }
}
