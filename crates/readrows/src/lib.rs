//! Read query results into structs.
//!
//! ```ignore
//! #[derive(Debug, Default, readrows::Record)]
//! struct User {
//!     #[column("id")]
//!     ID: i64,
//!     display_name: String,
//! }
//!
//! let mut users: Vec<User> = vec![];
//! readrows::scan(&mut users, cursor)?;
//! ```
//!
//! Each field reads the column named by its `#[column("...")]` attribute,
//! or its name converted with [`casing::to_snake_case`]. Fields marked
//! `#[embed]` contribute their own fields in place. Columns with no
//! matching field are ignored.

pub use readrows_core::{
    bail, casing, collect, err, impl_element, scan, ColumnMap, Cursor, Dest, Element,
    ElementKind, Error, FieldDescriptor, Primitive, Record, Result, Slot, Value,
};
pub use readrows_macros::Record;

#[cfg(feature = "sqlite")]
pub use readrows_driver_sqlite as sqlite;

#[doc(hidden)]
pub mod codegen_support {
    pub use readrows_core::{Dest, Element, ElementKind, FieldDescriptor, Record};
    pub use std::{boxed::Box, vec::Vec};
}
