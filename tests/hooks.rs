//! Hook bindings: dispatch, root scoping, strict mode.

use jsonpluck::{AsSlot, Error, Populator, Record, Slot, populate, record};
use serde_json::Value;

#[derive(Debug, Default)]
struct User {
    first: String,
    last: String,
    full: String,
}

impl Record for User {
    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("first", "first_name"),
            ("last", "last_name"),
            ("full", "func:full_name"),
        ]
    }

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        match index {
            0 => Some(Slot::Str(&mut self.first)),
            1 => Some(Slot::Str(&mut self.last)),
            2 => Some(Slot::Str(&mut self.full)),
            _ => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn apply_derived(&mut self, name: &str, _root: &Value) -> bool {
        match name {
            "full_name" => {
                self.full = format!("{} {}", self.first, self.last);
                true
            }
            _ => false,
        }
    }
}

#[test]
fn hooks_run_in_table_order() {
    // the hook observes fields declared before it already populated
    let mut user = User::default();
    populate(r#"{"first_name":"John","last_name":"Do"}"#, &mut user).unwrap();
    assert_eq!(user.full, "John Do");
}

/// Nested record whose hook reads a value from the top of the document.
#[derive(Debug, Default, PartialEq)]
struct Badge {
    label: String,
}

impl Record for Badge {
    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        &[("label", "func:site_label")]
    }

    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        match index {
            0 => Some(Slot::Str(&mut self.label)),
            _ => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn apply_derived(&mut self, name: &str, root: &Value) -> bool {
        if name != "site_label" {
            return false;
        }
        self.label = jsonpluck::query::get(root, "site.name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        true
    }
}

impl AsSlot for Badge {
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Record(self)
    }
}

record! {
    #[derive(Debug, Default)]
    struct Page {
        title: String = "page.title",
        badge: Badge = "page.badge",
    }
}

#[test]
fn nested_hook_sees_full_root() {
    let mut page = Page::default();
    populate(
        r#"{"site":{"name":"example.org"},"page":{"title":"Home","badge":{}}}"#,
        &mut page,
    )
    .unwrap();
    assert_eq!(page.title, "Home");
    // the hook resolved against the document root, not the `page.badge` scope
    assert_eq!(page.badge.label, "example.org");
}

record! {
    #[derive(Debug, Default)]
    struct Sloppy {
        value: i64 = "value",
        derived: String = "func:does_not_exist",
    }
}

#[test]
fn unhandled_hook_is_skipped_by_default() {
    let mut rec = Sloppy::default();
    populate(r#"{"value":1}"#, &mut rec).unwrap();
    assert_eq!(rec.value, 1);
    assert_eq!(rec.derived, "");
}

#[test]
fn unhandled_hook_fails_under_strict_mode() {
    let mut rec = Sloppy::default();
    let err = Populator::new()
        .strict_hooks(true)
        .populate_str(r#"{"value":1}"#, &mut rec)
        .unwrap_err();
    match err {
        Error::UnknownHook { field, name } => {
            assert_eq!(field, "derived");
            assert_eq!(name, "does_not_exist");
        }
        other => panic!("unexpected error: {other}"),
    }
    // fields before the failing binding were already written
    assert_eq!(rec.value, 1);
}
