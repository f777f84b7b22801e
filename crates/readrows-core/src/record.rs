use crate::{casing, Dest};

use std::borrow::Cow;

/// A type whose instances are materialized one per result row.
///
/// Usually implemented with `#[derive(Record)]`. Fields of embedded groups
/// are flattened into the parent, so `describe` and `bind` both walk the
/// leaf fields depth-first, in declaration order, and must agree on their
/// number and order.
pub trait Record: Default {
    /// Appends a descriptor for every leaf field.
    fn describe(fields: &mut Vec<FieldDescriptor>);

    /// Appends a destination for every leaf field, in `describe` order.
    fn bind<'a>(&'a mut self, slots: &mut Vec<&'a mut dyn Dest>);

    /// Returns the flattened field list.
    fn fields() -> Vec<FieldDescriptor> {
        let mut fields = vec![];
        Self::describe(&mut fields);
        fields
    }
}

/// Static description of one leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as written in the struct
    pub name: &'static str,

    /// Column name given with `#[column("...")]`
    pub column: Option<&'static str>,
}

impl FieldDescriptor {
    /// A field read from the snake cased form of its name.
    pub const fn new(name: &'static str) -> Self {
        Self { name, column: None }
    }

    /// A field read from an explicitly named column.
    pub const fn with_column(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column: Some(column),
        }
    }

    /// Column this field reads from: the override if one is set, the snake
    /// cased field name otherwise.
    pub fn column_name(&self) -> Cow<'static, str> {
        match self.column {
            Some(column) => Cow::Borrowed(column),
            None => Cow::Owned(casing::to_snake_case(self.name.trim_start_matches("r#"))),
        }
    }
}

/// How a record is stored in the output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The container holds records directly (`Vec<R>`)
    Value,

    /// The container holds owning references (`Vec<Box<R>>`)
    Boxed,
}

/// Element type of a scan target.
///
/// `#[derive(Record)]` implements this for both `R` and `Box<R>`; hand
/// written records can use [`impl_element!`](crate::impl_element).
pub trait Element: Sized {
    type Record: Record;

    const KIND: ElementKind;

    fn from_record(record: Self::Record) -> Self;
}

/// Implements [`Element`] for a record type and for `Box` of it.
#[macro_export]
macro_rules! impl_element {
    ($ty:ty) => {
        impl $crate::Element for $ty {
            type Record = $ty;

            const KIND: $crate::ElementKind = $crate::ElementKind::Value;

            fn from_record(record: $ty) -> Self {
                record
            }
        }

        impl $crate::Element for ::std::boxed::Box<$ty> {
            type Record = $ty;

            const KIND: $crate::ElementKind = $crate::ElementKind::Boxed;

            fn from_record(record: $ty) -> Self {
                ::std::boxed::Box::new(record)
            }
        }
    };
}
