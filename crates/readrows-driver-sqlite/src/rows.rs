use crate::value;

use readrows_core::{bail, Cursor, Error, Result, Slot, Value};
use rusqlite::{Params, Statement};

/// A [`Cursor`] over the rows of a prepared SQLite statement.
///
/// Each call to `next` reads the whole row, so `scan` only hands values
/// over. Closing drops the underlying `rusqlite::Rows`, which resets the
/// statement.
pub struct Rows<'stmt> {
    columns: Vec<String>,
    rows: Option<rusqlite::Rows<'stmt>>,
    current: Vec<Value>,
}

impl<'stmt> Rows<'stmt> {
    /// Executes `stmt` with `params` and returns a cursor over the result.
    pub fn query<P: Params>(stmt: &'stmt mut Statement<'_>, params: P) -> Result<Self> {
        let columns = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = stmt.query(params).map_err(Error::driver)?;

        Ok(Self {
            columns,
            rows: Some(rows),
            current: vec![],
        })
    }

    /// Returns `true` once the cursor has been closed.
    pub fn is_closed(&self) -> bool {
        self.rows.is_none()
    }
}

impl Cursor for Rows<'_> {
    fn columns(&mut self) -> Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn next(&mut self) -> Result<bool> {
        let Some(rows) = self.rows.as_mut() else {
            return Ok(false);
        };

        let Some(row) = rows.next().map_err(Error::driver)? else {
            self.current.clear();
            return Ok(false);
        };

        self.current = (0..self.columns.len())
            .map(|index| row.get_ref(index).map(value::from_sql))
            .collect::<rusqlite::Result<_>>()
            .map_err(Error::driver)?;

        Ok(true)
    }

    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<()> {
        if slots.len() != self.current.len() {
            bail!(
                "expected {} destinations for the current row, got {}",
                self.current.len(),
                slots.len()
            );
        }

        for (slot, value) in slots.iter_mut().zip(std::mem::take(&mut self.current)) {
            slot.set(value)?;
        }

        Ok(())
    }

    fn close(&mut self) {
        if self.rows.take().is_some() {
            log::debug!("sqlite rows closed");
        }
    }
}

impl std::fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rows")
            .field("columns", &self.columns)
            .field("closed", &self.is_closed())
            .finish()
    }
}
