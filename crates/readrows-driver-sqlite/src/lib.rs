mod rows;
pub use rows::Rows;

mod value;

use readrows_core::{Element, Error, Result};
use rusqlite::{Connection as RusqliteConnection, Params};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite configuration from a connection URL
    ///
    /// `sqlite::memory:` selects an in-memory database, `sqlite:<path>` a
    /// database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(&url_str, err.to_string()))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(
                &url_str,
                "connection URL does not have a `sqlite` scheme",
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(
                &url_str,
                "connection URL has no database path",
            ))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    /// Opens a connection. Every in-memory connection is a fresh database.
    pub fn connect(&self) -> Result<Connection> {
        log::debug!("connecting to {}", self.url());

        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Runs a statement that returns no rows and reports the affected row
    /// count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.connection.execute(sql, params).map_err(Error::driver)
    }

    /// Runs a batch of semicolon separated statements.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }

    /// Runs a query and appends its rows to `target`.
    ///
    /// See [`readrows_core::scan`] for the mapping rules and for what
    /// `target` holds when an error is returned.
    pub fn query_into<T, P>(&self, sql: &str, params: P, target: &mut Vec<T>) -> Result<()>
    where
        T: Element,
        P: Params,
    {
        let mut stmt = self.connection.prepare(sql).map_err(Error::driver)?;
        let rows = Rows::query(&mut stmt, params)?;

        readrows_core::scan(target, rows)
    }

    /// Runs a query and collects its rows.
    pub fn query<T, P>(&self, sql: &str, params: P) -> Result<Vec<T>>
    where
        T: Element,
        P: Params,
    {
        let mut ret = vec![];
        self.query_into(sql, params, &mut ret)?;
        Ok(ret)
    }

    /// Returns the underlying rusqlite connection.
    pub fn as_rusqlite(&self) -> &RusqliteConnection {
        &self.connection
    }
}
