use crate::{CursorLog, CursorOp};

use readrows::{err, Cursor, Result, Slot, Value};
use std::collections::VecDeque;

/// A scripted in-memory cursor.
///
/// Rows are returned in the order they were added. Failures can be injected
/// for the column list and for the scan of a specific row.
#[derive(Debug)]
pub struct MockCursor {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
    /// 1-based index of the row whose scan fails
    fail_scan_at: Option<usize>,
    fail_columns: bool,
    scanned: usize,
    closed: bool,
    log: CursorLog,
}

impl MockCursor {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: VecDeque::new(),
            current: None,
            fail_scan_at: None,
            fail_columns: false,
            scanned: 0,
            closed: false,
            log: CursorLog::default(),
        }
    }

    pub fn row<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let row: Vec<Value> = values.into_iter().map(Into::into).collect();
        assert_eq!(row.len(), self.columns.len(), "row width must match columns");
        self.rows.push_back(row);
        self
    }

    /// Makes the scan of the `n`th row (1-based) fail.
    pub fn fail_scan_at(mut self, n: usize) -> Self {
        self.fail_scan_at = Some(n);
        self
    }

    /// Makes the column list unavailable.
    pub fn fail_columns(mut self) -> Self {
        self.fail_columns = true;
        self
    }

    pub fn log(&self) -> CursorLog {
        self.log.clone()
    }
}

impl Cursor for MockCursor {
    fn columns(&mut self) -> Result<Vec<String>> {
        self.log.push(CursorOp::Columns);

        if self.fail_columns {
            return Err(err!("columns unavailable"));
        }

        Ok(self.columns.clone())
    }

    fn next(&mut self) -> Result<bool> {
        self.log.push(CursorOp::Next);
        assert!(!self.closed, "next() on a closed cursor");

        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn scan(&mut self, slots: &mut [Slot<'_>]) -> Result<()> {
        let bound = slots.iter().filter(|slot| slot.is_bound()).count();
        self.log.push(CursorOp::Scan { bound });
        assert_eq!(slots.len(), self.columns.len(), "one slot per column");

        self.scanned += 1;
        if self.fail_scan_at == Some(self.scanned) {
            return Err(err!("scan failed at row {}", self.scanned));
        }

        let Some(row) = self.current.take() else {
            return Err(err!("scan without a current row"));
        };

        for (slot, value) in slots.iter_mut().zip(row) {
            slot.set(value)?;
        }

        Ok(())
    }

    fn close(&mut self) {
        self.log.push(CursorOp::Close);
        self.closed = true;
    }
}
