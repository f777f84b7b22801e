use readrows::sqlite::{Connection, Sqlite};

/// Opens a fresh in-memory database holding the `foo` table with two rows.
pub fn foo_db() -> Connection {
    crate::init_logging();

    let conn = Sqlite::in_memory().connect().unwrap();
    conn.execute_batch(
        "CREATE TABLE foo (
            id INTEGER NOT NULL,
            text TEXT NOT NULL,
            bool BOOLEAN NOT NULL,
            dt DATETIME NOT NULL
        );
        INSERT INTO foo (id, text, bool, dt) VALUES
            (1, 'foo', 1, DATETIME()),
            (2, 'bar', 0, DATETIME());",
    )
    .unwrap();

    conn
}
