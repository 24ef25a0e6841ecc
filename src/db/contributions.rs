/// Imported GitHub contribution days.
use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;

use crate::types::{Activity, ActivityLevel};

pub fn upsert_contributions(activities: &[Activity], conn: &mut Connection) -> Result<usize> {
    let imported_at = Local::now().to_rfc3339();
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO contributions (date, count, level, imported_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(date) DO UPDATE SET count = excluded.count,
                                             level = excluded.level,
                                             imported_at = excluded.imported_at",
        )?;
        for activity in activities {
            stmt.execute(rusqlite::params![
                activity.date,
                activity.count,
                activity.level.as_u8(),
                imported_at
            ])?;
        }
    }
    tx.commit()?;
    Ok(activities.len())
}

pub fn query_contributions(conn: &Connection) -> Result<Vec<Activity>> {
    let mut stmt = conn.prepare("SELECT date, count, level FROM contributions ORDER BY date")?;
    let rows = stmt.query_map([], |row| {
        let level: u8 = row.get(2)?;
        Ok(Activity {
            date: row.get(0)?,
            count: row.get(1)?,
            level: ActivityLevel::try_from(level).unwrap_or_default(),
        })
    })?;
    let mut activities = Vec::new();
    for row in rows {
        activities.push(row?);
    }
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_in_memory;

    #[test]
    fn stores_and_reads_levels() {
        let mut conn = init_in_memory().unwrap();
        let activities = vec![
            Activity {
                date: "2024-01-02".to_string(),
                count: 12,
                level: ActivityLevel::High,
            },
            Activity {
                date: "2024-01-01".to_string(),
                count: 0,
                level: ActivityLevel::None,
            },
        ];
        assert_eq!(upsert_contributions(&activities, &mut conn).unwrap(), 2);

        let stored = query_contributions(&conn).unwrap();
        assert_eq!(stored[0].date, "2024-01-01");
        assert_eq!(stored[1].level, ActivityLevel::High);
        assert_eq!(stored[1].count, 12);
    }
}
