//! Error types for population.

use core::fmt;

/// Errors returned by [`populate`](crate::populate()) and friends.
///
/// Population is fail-fast with whole-call granularity: the first error
/// anywhere in the field walk, including inside nested records and sequence
/// elements, aborts the call. Fields written before the failing field remain
/// written; it is the caller's call whether a partially-populated destination
/// is still usable.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The source text failed to parse as a document.
    InvalidDocument(serde_json::Error),

    /// A field declaration used a binding kind other than `path` or `func`.
    UnknownBindingKind {
        /// Name of the offending field.
        field: &'static str,
        /// The unrecognized kind prefix, verbatim.
        kind: String,
        /// Everything after the first colon of the declaration.
        payload: String,
    },

    /// The record declined to expose a mutable slot for a path-bound field.
    FieldNotWritable {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The document value cannot be stored in the field's slot.
    UnsupportedFieldType {
        /// Name of the offending field.
        field: &'static str,
        /// Kind of the document node (`"object"`, `"number"`, ...).
        node: &'static str,
        /// Kind of the destination slot (`"i64"`, `"record"`, ...).
        slot: &'static str,
    },

    /// A `func:` binding named a hook the record does not handle.
    ///
    /// Only returned under [`Populator::strict_hooks`](crate::Populator::strict_hooks);
    /// the permissive default skips the field.
    UnknownHook {
        /// Name of the offending field.
        field: &'static str,
        /// The hook name from the declaration.
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDocument(err) => write!(f, "invalid source document: {err}"),
            Error::UnknownBindingKind {
                field,
                kind,
                payload,
            } => {
                write!(
                    f,
                    "unknown binding kind `{kind}` with payload `{payload}` on field `{field}`"
                )
            }
            Error::FieldNotWritable { field } => {
                write!(f, "field `{field}` does not expose a writable slot")
            }
            Error::UnsupportedFieldType { field, node, slot } => {
                write!(f, "cannot store a {node} value into field `{field}` (a {slot} slot)")
            }
            Error::UnknownHook { field, name } => {
                write!(
                    f,
                    "field `{field}` declares hook `{name}`, but the record does not handle it"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDocument(err) => Some(err),
            _ => None,
        }
    }
}
