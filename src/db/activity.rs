/// Imported Wakatime day totals.
use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use crate::types::ActivityDay;

/// Insert or replace each day; returns how many rows were written.
pub fn upsert_activity_days(days: &[ActivityDay], conn: &mut Connection) -> Result<usize> {
    let imported_at = Local::now().to_rfc3339();
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO activity_days (date, total_seconds, imported_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(date) DO UPDATE SET total_seconds = excluded.total_seconds,
                                             imported_at = excluded.imported_at",
        )?;
        for day in days {
            stmt.execute(rusqlite::params![day.date, day.total_seconds, imported_at])?;
        }
    }
    tx.commit()?;
    Ok(days.len())
}

pub fn query_activity_days(conn: &Connection) -> Result<Vec<ActivityDay>> {
    let mut stmt = conn.prepare("SELECT date, total_seconds FROM activity_days ORDER BY date")?;
    let rows = stmt.query_map([], |row| {
        Ok(ActivityDay {
            date: row.get(0)?,
            total_seconds: row.get(1)?,
        })
    })?;
    let mut days = Vec::new();
    for row in rows {
        days.push(row?);
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_in_memory;

    fn day(date: &str, total_seconds: f64) -> ActivityDay {
        ActivityDay {
            date: date.to_string(),
            total_seconds,
        }
    }

    #[test]
    fn upsert_replaces_existing_date() {
        let mut conn = init_in_memory().unwrap();
        upsert_activity_days(&[day("2024-01-02", 10.0), day("2024-01-01", 20.0)], &mut conn)
            .unwrap();
        upsert_activity_days(&[day("2024-01-02", 99.5)], &mut conn).unwrap();

        let days = query_activity_days(&conn).unwrap();
        assert_eq!(days, vec![day("2024-01-01", 20.0), day("2024-01-02", 99.5)]);
    }
}
