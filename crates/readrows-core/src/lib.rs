//! Row materialization: turns the rows of a query result into records.
//!
//! A [`Cursor`] hands over column names and row values, a [`Record`]
//! describes its (flattened) fields, and [`scan()`] binds one to the other
//! by column name.

pub mod casing;

mod column_map;
pub use column_map::ColumnMap;

mod cursor;
pub use cursor::{Cursor, Slot};

mod error;
pub use error::Error;

mod primitive;
pub use primitive::{Dest, Primitive};

#[cfg(feature = "jiff")]
mod primitive_jiff;

mod record;
pub use record::{Element, ElementKind, FieldDescriptor, Record};

mod scan;
pub use scan::{collect, scan};

mod value;
pub use value::Value;

/// A Result type alias that uses readrows' [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
