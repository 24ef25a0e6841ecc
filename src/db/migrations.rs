/// Database migrations and schema management.
use anyhow::Result;
use rusqlite::Connection;

/// Creates the schema if it doesn't exist yet.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS activity_days (
            date          TEXT PRIMARY KEY,
            total_seconds REAL NOT NULL,
            imported_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS contributions (
            date        TEXT PRIMARY KEY,
            count       INTEGER NOT NULL,
            level       INTEGER NOT NULL CHECK (level BETWEEN 0 AND 4),
            imported_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn rejects_out_of_range_levels() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let result = conn.execute(
            "INSERT INTO contributions (date, count, level, imported_at) VALUES ('2024-01-01', 3, 9, 'x')",
            [],
        );
        assert!(result.is_err());
    }
}
