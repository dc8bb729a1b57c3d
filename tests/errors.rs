//! Failure modes: bad declarations, incompatible values, fail-fast behavior.

use jsonpluck::{Error, Record, Slot, populate, record};

#[test]
fn unknown_binding_kind_aborts() {
    record! {
        #[derive(Debug, Default)]
        struct Odd {
            nums: Vec<i64> = "test:test",
        }
    }

    // fails even though no document value would ever resolve for the field
    let mut odd = Odd::default();
    let err = populate("{}", &mut odd).unwrap_err();
    match &err {
        Error::UnknownBindingKind {
            field,
            kind,
            payload,
        } => {
            assert_eq!(*field, "nums");
            assert_eq!(kind, "test");
            assert_eq!(payload, "test");
        }
        other => panic!("unexpected error: {other}"),
    }
    insta::assert_snapshot!(err, @"unknown binding kind `test` with payload `test` on field `nums`");
}

#[test]
fn invalid_document() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            value: i64 = "value",
        }
    }

    let mut rec = Rec::default();
    let err = populate("{not json", &mut rec).unwrap_err();
    assert!(matches!(err, Error::InvalidDocument(_)));
}

#[test]
fn bool_into_string_is_unsupported() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            flag: String = "flag",
        }
    }

    let mut rec = Rec::default();
    let err = populate(r#"{"flag":true}"#, &mut rec).unwrap_err();
    insta::assert_snapshot!(err, @"cannot store a boolean value into field `flag` (a string slot)");
}

#[test]
fn object_into_scalar_is_unsupported() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            data: i64 = "data",
        }
    }

    let mut rec = Rec::default();
    let err = populate(r#"{"data":{"name":"John"}}"#, &mut rec).unwrap_err();
    match err {
        Error::UnsupportedFieldType { field, node, slot } => {
            assert_eq!(field, "data");
            assert_eq!(node, "object");
            assert_eq!(slot, "i64");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn number_into_sequence_is_unsupported() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            vals: Vec<i64> = "vals",
        }
    }

    let mut rec = Rec::default();
    let err = populate(r#"{"vals":5}"#, &mut rec).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedFieldType {
            node: "number",
            slot: "sequence",
            ..
        }
    ));
}

#[test]
fn fail_fast_leaves_earlier_fields_written() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            a: String = "a",
            bad: String = "flag",
            c: String = "c",
        }
    }

    let mut rec = Rec::default();
    let err = populate(r#"{"a":"x","flag":true,"c":"y"}"#, &mut rec).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFieldType { .. }));
    // fields before the failure stay written, fields after stay default
    assert_eq!(rec.a, "x");
    assert_eq!(rec.c, "");
}

#[test]
fn array_element_failure_discards_sequence() {
    record! {
        #[derive(Debug, Default)]
        struct Rec {
            vals: Vec<i64> = "vals",
        }
    }
    record! {
        #[derive(Debug, Default)]
        struct OptRec {
            vals: Option<Vec<i64>> = "vals",
        }
    }

    let doc = r#"{"vals":[1,{},3]}"#;

    let mut rec = Rec::default();
    let err = populate(doc, &mut rec).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFieldType { .. }));
    assert!(rec.vals.is_empty());

    let mut opt = OptRec::default();
    let err = populate(doc, &mut opt).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFieldType { .. }));
    assert_eq!(opt.vals, None);
}

#[test]
fn unwritable_field() {
    struct Sealed {
        hidden: i64,
    }

    impl Record for Sealed {
        fn bindings(&self) -> &'static [(&'static str, &'static str)] {
            &[("hidden", "hidden")]
        }

        fn slot(&mut self, _index: usize) -> Option<Slot<'_>> {
            None
        }

        fn reset(&mut self) {
            self.hidden = 0;
        }
    }

    let mut sealed = Sealed { hidden: 0 };
    let err = populate(r#"{"hidden":1}"#, &mut sealed).unwrap_err();
    match err {
        Error::FieldNotWritable { field } => assert_eq!(field, "hidden"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(sealed.hidden, 0);
}
