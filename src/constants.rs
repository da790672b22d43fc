use std::collections::HashMap;

use crate::value::Value;

/// Key prefix that marks a top-level mapping entry as a global constant.
pub const GLOBAL_PREFIX: &str = "global ";

/// The flat table of global constants extracted from a document's top-level
/// mapping.
///
/// Built once per conversion and read-only afterward. Only top-level keys
/// are inspected; a `global `-prefixed key inside a nested mapping is an
/// ordinary key. Duplicate names overwrite silently, last write wins.
///
/// # Examples
///
/// ```
/// use cumin_lang::{ConstantTable, Value};
///
/// let pairs = vec![
///     ("global x".to_string(), Value::Integer(10)),
///     ("config".to_string(), Value::Mapping(vec![])),
/// ];
/// let table = ConstantTable::build(&pairs);
/// assert_eq!(table.get("x"), Some(&Value::Integer(10)));
/// assert_eq!(table.get("config"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: HashMap<String, Value>,
}

impl ConstantTable {
    /// Scan the top-level pairs once and collect every `global `-prefixed
    /// entry. The source pairs are not modified; filtering globals out of
    /// the output is the driver's job.
    pub fn build(pairs: &[(String, Value)]) -> Self {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            if let Some(name) = key.strip_prefix(GLOBAL_PREFIX) {
                entries.insert(name.to_string(), value.clone());
            }
        }
        ConstantTable { entries }
    }

    /// Look up a constant by exact name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
