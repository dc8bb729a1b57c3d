//! Document parsing and path resolution.
//!
//! The engine treats this module as a collaborator: everything it relies on
//! is [`parse`], the "missing means null" contract of [`get`], and the kind
//! labels from [`kind_name`]. The path grammar is deliberately small:
//! dot-separated segments, where a segment applied to an array is parsed as
//! an element index.

use serde_json::Value;

use crate::error::Error;

/// Parse raw document text into a root node.
pub fn parse(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(Error::InvalidDocument)
}

/// Resolve a path expression against a node.
///
/// Returns `None` when the path does not exist. Absence is not an error: the
/// engine treats a missing value exactly like an explicit null, which is what
/// lets a document omit keys without failing the whole call.
pub fn get<'doc>(node: &'doc Value, path: &str) -> Option<&'doc Value> {
    let mut current = node;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Diagnostic label for a node's kind.
pub fn kind_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
