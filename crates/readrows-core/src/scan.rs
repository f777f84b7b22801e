use crate::{ColumnMap, Cursor, Dest, Element, Error, Record, Result, Slot};

use std::any::type_name;
use std::ops::{Deref, DerefMut};

/// Reads every row of `cursor` into `target`.
///
/// Columns are matched to the fields of `T`'s record type by name: a field
/// reads the column named by its `#[column("...")]` attribute, or its
/// snake cased name otherwise. Columns without a matching field are
/// skipped and fields without a matching column keep their default value.
/// Rows are appended in arrival order, as values or boxed depending on the
/// element type of `target`.
///
/// The cursor is closed before this function returns, whatever the
/// outcome. On error, rows read before the failure stay in `target`, so
/// the contents should be treated as truncated.
///
/// # Errors
///
/// Fails before reading anything if the record type binds a different
/// number of fields than it describes. Errors from the cursor are returned
/// unchanged and stop the scan.
///
/// A record without fields is valid: every column is absorbed and one
/// default record is appended per row.
pub fn scan<T, C>(target: &mut Vec<T>, cursor: C) -> Result<()>
where
    T: Element,
    C: Cursor,
{
    let mut cursor = CloseGuard(cursor);

    let fields = T::Record::fields();
    let width = check_shape::<T::Record>(fields.len())?;

    let columns = cursor.columns()?;
    let map = ColumnMap::from_fields(&fields);
    let bindings = map.bindings(&columns);

    log::debug!(
        "scanning into {} ({:?}); columns={:?} bound={}",
        type_name::<T::Record>(),
        T::KIND,
        columns,
        bindings.iter().flatten().count(),
    );

    let mut rows = 0_usize;

    while cursor.next()? {
        let mut record = T::Record::default();

        {
            let mut dests = Vec::with_capacity(width);
            record.bind(&mut dests);

            let mut dests: Vec<Option<&mut dyn Dest>> = dests.into_iter().map(Some).collect();

            let mut slots: Vec<Slot<'_>> = bindings
                .iter()
                .map(|binding| match *binding {
                    Some(index) => dests[index].take().map_or(Slot::Absorb, Slot::Bound),
                    None => Slot::Absorb,
                })
                .collect();

            cursor.scan(&mut slots)?;
        }

        target.push(T::from_record(record));
        rows += 1;

        log::trace!("scanned row {rows}");
    }

    log::debug!("scan complete; rows={rows}");

    Ok(())
}

/// Reads every row of `cursor` into a new vector.
///
/// Unlike [`scan`], nothing is returned on error.
pub fn collect<T: Element>(cursor: impl Cursor) -> Result<Vec<T>> {
    let mut rows = vec![];
    scan(&mut rows, cursor)?;
    Ok(rows)
}

/// Checks that `R` can hold a row and returns its flattened width.
fn check_shape<R: Record>(described: usize) -> Result<usize> {
    let mut probe = R::default();
    let mut dests = Vec::with_capacity(described);
    probe.bind(&mut dests);

    if dests.len() != described {
        return Err(Error::invalid_record(
            type_name::<R>(),
            format!(
                "record describes {described} fields but binds {}",
                dests.len()
            ),
        ));
    }

    Ok(described)
}

/// Owns the cursor for the duration of a scan and closes it on drop.
struct CloseGuard<C: Cursor>(C);

impl<C: Cursor> Deref for CloseGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C: Cursor> DerefMut for CloseGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.0
    }
}

impl<C: Cursor> Drop for CloseGuard<C> {
    fn drop(&mut self) {
        self.0.close();
        log::trace!("cursor closed");
    }
}
