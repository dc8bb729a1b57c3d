#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Populate structs from loosely-shaped JSON via per-field path bindings.
//!
//! Where a conventional deserializer requires the document's shape to mirror
//! the struct's shape, `jsonpluck` attaches a declarative path expression to
//! each destination field and pulls values from anywhere in the document,
//! including unrelated branches. Fields that cannot be expressed as a single
//! path lookup delegate to a hook on the destination type.
//!
//! ```
//! jsonpluck::record! {
//!     #[derive(Debug, Default)]
//!     struct User {
//!         first_name: String = "first_name",
//!         age: i64 = "age",
//!         city: String = "address.city",
//!     }
//! }
//!
//! let mut user = User::default();
//! jsonpluck::populate(
//!     r#"{"first_name": "John", "age": 18, "address": {"city": "Oslo"}}"#,
//!     &mut user,
//! )
//! .unwrap();
//! assert_eq!(user.first_name, "John");
//! assert_eq!(user.age, 18);
//! assert_eq!(user.city, "Oslo");
//! ```
//!
//! Population is fail-fast and in place: the first unrecoverable condition
//! aborts the call, leaving fields written before the failure as they are.
//! Missing paths and explicit nulls are not errors; the field simply keeps
//! its current value.

mod error;
mod macros;
mod populate;
mod record;
mod tag;
pub mod query;

pub use error::Error;
pub use populate::Populator;
pub use record::{AsSlot, CellSlot, Record, SeqSlot, Slot};
pub use tag::Binding;

use serde_json::Value;

/// Parse `text` and populate `dest` from the resulting document.
///
/// Shorthand for [`Populator::populate_str`] with the permissive defaults.
///
/// ```
/// jsonpluck::record! {
///     #[derive(Debug, Default)]
///     struct Status {
///         code: i64 = "code",
///         message: String = "msg",
///     }
/// }
///
/// let mut status = Status::default();
/// jsonpluck::populate(r#"{"code": 0, "msg": "ok"}"#, &mut status).unwrap();
/// assert_eq!(status.code, 0);
/// assert_eq!(status.message, "ok");
/// ```
pub fn populate(text: &str, dest: &mut dyn Record) -> Result<(), Error> {
    Populator::new().populate_str(text, dest)
}

/// Populate `dest` from an already-parsed document root.
///
/// Useful when one document feeds several destinations: parse once with
/// [`query::parse`] (or anything else that yields a [`serde_json::Value`])
/// and populate each record from the same root.
pub fn populate_value(root: &Value, dest: &mut dyn Record) -> Result<(), Error> {
    Populator::new().populate(root, dest)
}
