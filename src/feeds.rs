/// Parsers for activity feeds saved from Wakatime and the GitHub contributions API.
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::types::{Activity, ActivityDay};

#[derive(Deserialize)]
struct WakatimeDay {
    date: String,
    #[serde(default)]
    total: f64,
}

#[derive(Deserialize)]
struct GithubResponse {
    contributions: Vec<Activity>,
}

/// Days from a Wakatime share payload (`{"days": [{"date", "total"}, ...]}`).
pub fn parse_wakatime(json: &str) -> Result<Vec<ActivityDay>> {
    let mut payload: Value = serde_json::from_str(json).context("wakatime feed is not valid JSON")?;
    let days = match payload.get_mut("days").map(Value::take) {
        Some(days @ Value::Array(_)) => days,
        _ => bail!("wakatime feed has no days array"),
    };
    let days: Vec<WakatimeDay> =
        serde_json::from_value(days).context("wakatime feed has a malformed day")?;

    Ok(days
        .into_iter()
        .map(|day| ActivityDay {
            date: day.date,
            total_seconds: day.total,
        })
        .collect())
}

/// Contributions from the GitHub contributions API (`{"contributions": [{"date", "count", "level"}]}`).
pub fn parse_github(json: &str) -> Result<Vec<Activity>> {
    let response: GithubResponse =
        serde_json::from_str(json).context("github feed is not a contributions payload")?;
    Ok(response.contributions)
}

pub fn read_wakatime(path: &Path) -> Result<Vec<ActivityDay>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_wakatime(&content).with_context(|| format!("parsing {}", path.display()))
}

pub fn read_github(path: &Path) -> Result<Vec<Activity>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_github(&content).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityLevel;

    #[test]
    fn wakatime_days_map_total_seconds() {
        let json = r#"{
            "days": [
                {"date": "2024-01-01", "total": 0, "categories": []},
                {"date": "2024-01-02", "total": 5000.5, "categories": [{"name": "Coding", "total": 5000.5}]}
            ],
            "status": "ok",
            "is_up_to_date": true
        }"#;
        let days = parse_wakatime(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, "2024-01-02");
        assert_eq!(days[1].total_seconds, 5000.5);
    }

    #[test]
    fn wakatime_without_days_is_rejected() {
        let err = parse_wakatime(r#"{"status": "ok"}"#).unwrap_err();
        assert!(err.to_string().contains("no days array"));
        assert!(parse_wakatime(r#"{"days": {"date": "2024-01-01"}}"#).is_err());
        assert!(parse_wakatime("not json").is_err());
    }

    #[test]
    fn github_contributions_keep_levels() {
        let json = r#"{
            "total": {"lastYear": 12},
            "contributions": [
                {"date": "2024-01-01", "count": 0, "level": 0},
                {"date": "2024-01-02", "count": 12, "level": 3}
            ]
        }"#;
        let activities = parse_github(json).unwrap();
        assert_eq!(activities[1].count, 12);
        assert_eq!(activities[1].level, ActivityLevel::High);
    }

    #[test]
    fn github_level_out_of_range_is_rejected() {
        let json = r#"{"contributions": [{"date": "2024-01-01", "count": 3, "level": 7}]}"#;
        assert!(parse_github(json).is_err());
    }

    #[test]
    fn read_reports_missing_file() {
        let err = read_wakatime(Path::new("/nonexistent/wakatime.json")).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
