/// Database module with imported activity queries and migrations.
mod activity;
mod contributions;
mod migrations;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use activity::{query_activity_days, upsert_activity_days};
pub use contributions::{query_contributions, upsert_contributions};

use crate::activity::to_activity;
use crate::types::{Activity, ActivitySource};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    let conn = Connection::open(db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Every stored day for `source`, classified for the heatmap.
pub fn query_activities(source: ActivitySource, conn: &Connection) -> Result<Vec<Activity>> {
    Ok(match source {
        ActivitySource::Wakatime => query_activity_days(conn)?.iter().map(to_activity).collect(),
        ActivitySource::Github => query_contributions(conn)?,
    })
}

#[cfg(test)]
pub(crate) fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn init_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/bento.db");
        init(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn init_reports_unusable_parent() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        File::create(&blocker).unwrap();

        let err = init(&blocker.join("bento.db")).unwrap_err();
        assert!(err.to_string().contains("creating database directory"));
    }
}
