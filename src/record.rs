//! Destination records and field slots.
//!
//! Instead of runtime reflection, a destination type carries an explicit
//! table: [`Record::bindings`] lists `(field name, raw declaration)` pairs in
//! declaration order, and [`Record::slot`] hands out the matching mutable
//! [`Slot`] by table index. The [`record!`](crate::record!) macro generates
//! all of this from a struct definition.

use serde_json::Value;

/// A destination type the engine can populate.
///
/// Usually generated by [`record!`](crate::record!); implemented by hand when
/// a record wants hook bindings (`func:<name>`), since those override
/// [`apply_derived`](Record::apply_derived).
pub trait Record {
    /// The ordered `(field name, raw binding declaration)` table.
    ///
    /// Fields are processed in exactly this order on every populate call.
    fn bindings(&self) -> &'static [(&'static str, &'static str)];

    /// Mutable slot for the field at `index` in the
    /// [`bindings`](Record::bindings) table.
    ///
    /// Returning `None` marks the field as not writable; a path binding on
    /// such a field fails the call with
    /// [`FieldNotWritable`](crate::Error::FieldNotWritable).
    fn slot(&mut self, index: usize) -> Option<Slot<'_>>;

    /// Reset the record to its default value.
    ///
    /// The engine calls this before repopulating a nested by-value record
    /// from a document object, so the slot always ends up holding a fresh
    /// instance rather than a blend of old and new subfields — the same
    /// fresh allocation the optional and sequence forms get. Called again on
    /// failure, so no partially-written instance is observable.
    fn reset(&mut self);

    /// Hook entry point for `func:<name>` bindings.
    ///
    /// Called with the hook name and the *full original document root*, not
    /// the per-field child node, so a hook can read sibling data from
    /// anywhere in the document, even when the record is nested. Hooks run in
    /// table order, so a hook observes fields declared before it already
    /// populated.
    ///
    /// Returns whether the hook was handled. The default handles nothing.
    fn apply_derived(&mut self, name: &str, root: &Value) -> bool {
        let _ = (name, root);
        false
    }
}

/// A writable view of one destination field.
pub enum Slot<'a> {
    /// An `i8` field.
    I8(&'a mut i8),
    /// An `i16` field.
    I16(&'a mut i16),
    /// An `i32` field.
    I32(&'a mut i32),
    /// An `i64` field.
    I64(&'a mut i64),
    /// A `u8` field.
    U8(&'a mut u8),
    /// A `u16` field.
    U16(&'a mut u16),
    /// A `u32` field.
    U32(&'a mut u32),
    /// A `u64` field.
    U64(&'a mut u64),
    /// An `f32` field.
    F32(&'a mut f32),
    /// An `f64` field.
    F64(&'a mut f64),
    /// A `String` field.
    Str(&'a mut String),
    /// A `bool` field.
    Bool(&'a mut bool),
    /// A nested record, populated in place.
    Record(&'a mut dyn Record),
    /// An optional boxed record, allocated on demand.
    OptRecord(&'a mut dyn CellSlot),
    /// A homogeneous sequence of records or scalars.
    Seq(&'a mut dyn SeqSlot),
}

impl Slot<'_> {
    /// Diagnostic label for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Slot::I8(_) => "i8",
            Slot::I16(_) => "i16",
            Slot::I32(_) => "i32",
            Slot::I64(_) => "i64",
            Slot::U8(_) => "u8",
            Slot::U16(_) => "u16",
            Slot::U32(_) => "u32",
            Slot::U64(_) => "u64",
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
            Slot::Str(_) => "string",
            Slot::Bool(_) => "bool",
            Slot::Record(_) => "record",
            Slot::OptRecord(_) => "optional record",
            Slot::Seq(_) => "sequence",
        }
    }
}

/// Conversion of a concrete field into a [`Slot`].
///
/// This is the glue between field types and the engine: scalars, sequences,
/// and optional boxed records all come with an impl, and
/// [`record!`](crate::record!) emits one for every record type it defines so
/// records nest.
pub trait AsSlot {
    /// Borrow `self` as a writable slot.
    fn as_slot(&mut self) -> Slot<'_>;
}

macro_rules! scalar_slots {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

scalar_slots! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    bool => Bool,
}

/// An optional nested record: absent until the document provides an object.
pub trait CellSlot {
    /// Install a fresh default record and hand it out for population.
    fn put_default(&mut self) -> &mut dyn Record;

    /// Reset to absent, after a failed population.
    fn clear(&mut self);
}

impl<T: Record + Default> CellSlot for Option<Box<T>> {
    fn put_default(&mut self) -> &mut dyn Record {
        &mut **self.insert(Box::new(T::default()))
    }

    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Record + Default> AsSlot for Option<Box<T>> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::OptRecord(self)
    }
}

/// A homogeneous sequence being rebuilt from a document array.
///
/// The engine drives this as `begin`, then one `push_default` per source
/// element in order, with `rollback` discarding everything if any element
/// fails to convert.
pub trait SeqSlot {
    /// Reset to an empty, present sequence.
    fn begin(&mut self);

    /// Append a default element and hand out its slot.
    fn push_default(&mut self) -> Slot<'_>;

    /// Discard everything built so far.
    fn rollback(&mut self);
}

impl<T: AsSlot + Default> SeqSlot for Vec<T> {
    fn begin(&mut self) {
        self.clear();
    }

    fn push_default(&mut self) -> Slot<'_> {
        self.push(T::default());
        self.last_mut().expect("sequence is non-empty after push").as_slot()
    }

    fn rollback(&mut self) {
        self.clear();
    }
}

impl<T: AsSlot + Default> AsSlot for Vec<T> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Seq(self)
    }
}

impl<T: AsSlot + Default> SeqSlot for Option<Vec<T>> {
    fn begin(&mut self) {
        *self = Some(Vec::new());
    }

    fn push_default(&mut self) -> Slot<'_> {
        let items = self.get_or_insert_with(Vec::new);
        items.push(T::default());
        items.last_mut().expect("sequence is non-empty after push").as_slot()
    }

    fn rollback(&mut self) {
        *self = None;
    }
}

impl<T: AsSlot + Default> AsSlot for Option<Vec<T>> {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Seq(self)
    }
}
