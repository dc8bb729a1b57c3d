//! The population engine.
//!
//! Walks a record's binding table in declaration order, resolves each path
//! against the current document scope, and writes coerced values into the
//! record's slots. Nested records are populated recursively with the matched
//! object as their new scope; hooks always receive the original root.

use log::{debug, trace};
use serde_json::Value;

use crate::error::Error;
use crate::query;
use crate::record::{Record, Slot};
use crate::tag::Binding;

/// Drives population of a [`Record`] from a parsed document.
///
/// The engine is stateless apart from its configuration, so one `Populator`
/// can be reused across documents and destinations, including concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Populator {
    strict_hooks: bool,
}

impl Populator {
    /// An engine with the permissive defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`Error::UnknownHook`] when a `func:` binding names a hook
    /// the record does not handle, instead of silently skipping the field.
    ///
    /// The permissive default matches the grammar's "unrecognized shapes are
    /// harmless" stance, but it makes a misspelled hook name invisible;
    /// enable this to surface those as configuration errors.
    pub fn strict_hooks(mut self, strict: bool) -> Self {
        self.strict_hooks = strict;
        self
    }

    /// Parse `text` and populate `dest` from the resulting document.
    pub fn populate_str(&self, text: &str, dest: &mut dyn Record) -> Result<(), Error> {
        let root = query::parse(text)?;
        self.populate(&root, dest)
    }

    /// Populate `dest` from an already-parsed document root.
    ///
    /// Lets a caller reuse one parsed document across several destinations.
    pub fn populate(&self, root: &Value, dest: &mut dyn Record) -> Result<(), Error> {
        self.populate_scope(root, root, dest)
    }

    /// Walk `dest`'s binding table, resolving paths against `scope`.
    ///
    /// `root` is threaded through recursion untouched so hooks always see the
    /// full document, however deeply their record is nested.
    fn populate_scope(
        &self,
        root: &Value,
        scope: &Value,
        dest: &mut dyn Record,
    ) -> Result<(), Error> {
        let table = dest.bindings();
        for (index, (field, raw)) in table.iter().copied().enumerate() {
            let binding = Binding::parse(raw);
            trace!("field `{field}`: {binding:?}");
            match binding {
                Binding::Empty | Binding::Ignore => {}
                Binding::Path(path) => {
                    let slot = dest.slot(index).ok_or(Error::FieldNotWritable { field })?;
                    match query::get(scope, path) {
                        Some(node) => self.coerce(root, field, slot, node)?,
                        // Missing means null: leave the field alone.
                        None => trace!("no value at `{path}` for field `{field}`"),
                    }
                }
                Binding::Hook(name) => {
                    if !dest.apply_derived(name, root) {
                        if self.strict_hooks {
                            return Err(Error::UnknownHook {
                                field,
                                name: name.to_owned(),
                            });
                        }
                        debug!("record does not handle hook `{name}` for field `{field}`");
                    }
                }
                Binding::Unknown { kind, payload } => {
                    return Err(Error::UnknownBindingKind {
                        field,
                        kind: kind.to_owned(),
                        payload: payload.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Write `node` into `slot`, recursing for objects and arrays.
    fn coerce(
        &self,
        root: &Value,
        field: &'static str,
        slot: Slot<'_>,
        node: &Value,
    ) -> Result<(), Error> {
        match node {
            // Null never overwrites: the field keeps its current value.
            Value::Null => Ok(()),
            Value::Number(_) | Value::String(_) => write_scalar(field, slot, node),
            Value::Bool(flag) => match slot {
                Slot::Bool(slot) => {
                    *slot = *flag;
                    Ok(())
                }
                other => Err(unsupported(field, node, &other)),
            },
            Value::Object(_) => match slot {
                Slot::Record(rec) => {
                    // a document object always lands in a fresh instance
                    rec.reset();
                    if let Err(err) = self.populate_scope(root, node, rec) {
                        rec.reset();
                        return Err(err);
                    }
                    Ok(())
                }
                Slot::OptRecord(cell) => {
                    let rec = cell.put_default();
                    if let Err(err) = self.populate_scope(root, node, rec) {
                        cell.clear();
                        return Err(err);
                    }
                    Ok(())
                }
                other => Err(unsupported(field, node, &other)),
            },
            Value::Array(items) => match slot {
                Slot::Seq(seq) => {
                    seq.begin();
                    for item in items {
                        let elem = seq.push_default();
                        if let Err(err) = self.coerce(root, field, elem, item) {
                            seq.rollback();
                            return Err(err);
                        }
                    }
                    Ok(())
                }
                other => Err(unsupported(field, node, &other)),
            },
        }
    }
}

fn unsupported(field: &'static str, node: &Value, slot: &Slot<'_>) -> Error {
    Error::UnsupportedFieldType {
        field,
        node: query::kind_name(node),
        slot: slot.kind_name(),
    }
}

/// Lossy scalar conversions: numbers truncate toward zero into integer
/// slots, numeric strings parse, and anything unparseable yields the
/// destination type's zero. Numbers render verbatim into string slots.
fn write_scalar(field: &'static str, slot: Slot<'_>, node: &Value) -> Result<(), Error> {
    match slot {
        Slot::I8(s) => *s = node_i64(node) as i8,
        Slot::I16(s) => *s = node_i64(node) as i16,
        Slot::I32(s) => *s = node_i64(node) as i32,
        Slot::I64(s) => *s = node_i64(node),
        Slot::U8(s) => *s = node_u64(node) as u8,
        Slot::U16(s) => *s = node_u64(node) as u16,
        Slot::U32(s) => *s = node_u64(node) as u32,
        Slot::U64(s) => *s = node_u64(node),
        Slot::F32(s) => *s = node_f64(node) as f32,
        Slot::F64(s) => *s = node_f64(node),
        Slot::Str(s) => *s = node_text(node),
        other => return Err(unsupported(field, node, &other)),
    }
    Ok(())
}

fn node_i64(node: &Value) -> i64 {
    match node {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                v
            } else if let Some(v) = n.as_u64() {
                v as i64
            } else {
                n.as_f64().map_or(0, |f| f as i64)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn node_u64(node: &Value) -> u64 {
    match node {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(v) = n.as_i64() {
                v.max(0) as u64
            } else {
                n.as_f64().map_or(0, |f| f as u64)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as u64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn node_f64(node: &Value) -> f64 {
    match node {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn node_text(node: &Value) -> String {
    match node {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}
