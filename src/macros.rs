//! The [`record!`](crate::record!) declaration macro.

/// Declares a struct whose fields carry binding declarations, and implements
/// [`Record`](crate::Record) and [`AsSlot`](crate::AsSlot) for it.
///
/// Each field is written `name: Type = "declaration"`; the declaration is
/// anything [`Binding::parse`](crate::Binding::parse) accepts. Leaving the
/// declaration off means the field is never populated.
///
/// ```
/// jsonpluck::record! {
///     #[derive(Debug, Default)]
///     pub struct Login {
///         pub user: String = "credentials.user",
///         pub attempts: i64 = "attempts",
///         scratch: String, // no declaration: never populated
///     }
/// }
///
/// let mut login = Login::default();
/// jsonpluck::populate(
///     r#"{"credentials": {"user": "alice"}, "attempts": 3}"#,
///     &mut login,
/// )
/// .unwrap();
/// assert_eq!(login.user, "alice");
/// assert_eq!(login.attempts, 3);
/// ```
///
/// Record types must derive [`Default`]: the engine allocates fresh
/// instances when it populates nested, optional, and sequence fields.
///
/// Records that use `func:` bindings implement [`Record`](crate::Record) by
/// hand instead, so they can override
/// [`apply_derived`](crate::Record::apply_derived).
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $decl:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn bindings(&self) -> &'static [(&'static str, &'static str)] {
                &[
                    $(
                        (::core::stringify!($field), $crate::__decl!($($decl)?)),
                    )*
                ]
            }

            fn reset(&mut self) {
                *self = <$name as ::core::default::Default>::default();
            }

            fn slot(&mut self, index: usize) -> ::core::option::Option<$crate::Slot<'_>> {
                let mut at = 0usize;
                $(
                    if index == at {
                        return ::core::option::Option::Some(
                            $crate::AsSlot::as_slot(&mut self.$field),
                        );
                    }
                    at += 1;
                )*
                let _ = at;
                ::core::option::Option::None
            }
        }

        impl $crate::AsSlot for $name {
            fn as_slot(&mut self) -> $crate::Slot<'_> {
                $crate::Slot::Record(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __decl {
    () => {
        ""
    };
    ($decl:literal) => {
        $decl
    };
}
