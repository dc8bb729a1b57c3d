//! Per-field binding declarations.

/// Parsed form of a field's binding declaration.
///
/// Declarations are free text attached to a destination field:
///
/// | declaration          | binding                            |
/// |----------------------|------------------------------------|
/// | *(absent or empty)*  | [`Binding::Empty`]                 |
/// | `-`                  | [`Binding::Ignore`]                |
/// | `<path>`             | [`Binding::Path`]                  |
/// | `path:<path>`        | [`Binding::Path`]                  |
/// | `func:<name>`        | [`Binding::Hook`]                  |
/// | `<other>:<payload>`  | [`Binding::Unknown`]               |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// No declaration; the field is skipped.
    Empty,
    /// Explicit opt-out; the field is never touched.
    Ignore,
    /// The value comes from a document query with this path expression.
    Path(&'a str),
    /// The value is produced by the record's
    /// [`apply_derived`](crate::Record::apply_derived) hook with this name.
    Hook(&'a str),
    /// Unrecognized kind prefix. Not rejected here: the engine surfaces it as
    /// [`UnknownBindingKind`](crate::Error::UnknownBindingKind) at resolution
    /// time.
    Unknown {
        /// The prefix before the first colon, verbatim.
        kind: &'a str,
        /// Everything after the first colon.
        payload: &'a str,
    },
}

impl<'a> Binding<'a> {
    /// Parse a raw declaration.
    ///
    /// Total: every input maps to some binding, declarations without a
    /// recognized prefix fall back to [`Binding::Path`].
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Binding::Empty;
        }
        if raw == "-" {
            return Binding::Ignore;
        }
        // Split on the first colon only: path payloads may themselves
        // contain colons.
        match raw.split_once(':') {
            None => Binding::Path(raw),
            Some(("", payload)) => Binding::Path(payload),
            Some(("path", payload)) => Binding::Path(payload),
            Some(("func", name)) => Binding::Hook(name),
            Some((kind, payload)) => Binding::Unknown { kind, payload },
        }
    }
}
