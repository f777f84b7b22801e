use crate::{Dest, Result, Value};

/// A forward-only iterator over the rows of one query result.
///
/// Cursors are supplied by the caller and consumed by [`scan`]. The column
/// list must stay the same for the lifetime of the cursor, and
/// [`Cursor::scan`] fills the slots positionally, one slot per column in the
/// order [`Cursor::columns`] returned them.
///
/// [`scan`]: crate::scan()
pub trait Cursor {
    /// Returns the column names of the result set, in row order.
    fn columns(&mut self) -> Result<Vec<String>>;

    /// Advances to the next row. Returns `false` once the cursor is
    /// exhausted.
    fn next(&mut self) -> Result<bool>;

    /// Writes the current row into `slots`.
    ///
    /// `slots.len()` equals the number of columns.
    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<()>;

    /// Releases the underlying resource. Calling `close` more than once is a
    /// no-op.
    fn close(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn columns(&mut self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<()> {
        (**self).scan(slots)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn columns(&mut self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<()> {
        (**self).scan(slots)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Destination for one column of the current row.
pub enum Slot<'a> {
    /// The column is mapped to a record field
    Bound(&'a mut dyn Dest),

    /// The column has no field; its value is dropped unchecked
    Absorb,
}

impl Slot<'_> {
    /// Stores `value` in the slot.
    pub fn set(&mut self, value: Value) -> Result<()> {
        match self {
            Slot::Bound(dest) => dest.store(value),
            Slot::Absorb => Ok(()),
        }
    }

    /// Returns `true` if the column is mapped to a field.
    pub fn is_bound(&self) -> bool {
        matches!(self, Slot::Bound(_))
    }
}

impl core::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Slot::Bound(_) => f.write_str("Bound"),
            Slot::Absorb => f.write_str("Absorb"),
        }
    }
}
