/// CLI argument parsing and command handling.
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::Connection;

use crate::config::Config;
use crate::types::{ActivitySource, Theme};
use crate::{activity, db, feeds, photos};

#[derive(Parser)]
#[command(
    name = "bento",
    version,
    about = "Bento - A terminal portfolio dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a saved activity feed in the local database
    Import {
        #[arg(value_enum)]
        source: SourceArg,
        file: PathBuf,
    },
    /// Print the activity heatmap window
    Activity {
        #[arg(short = 's', long = "source", value_enum, default_value = "wakatime")]
        source: SourceArg,
        #[arg(short = 'd', long = "days")]
        days: Option<u32>,
        #[arg(short = 'a', long = "as-of")]
        as_of: Option<String>,
    },
    /// List the photo catalog for a theme
    Photos {
        #[arg(short = 't', long = "theme")]
        theme: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Wakatime,
    Github,
}

impl From<SourceArg> for ActivitySource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Wakatime => ActivitySource::Wakatime,
            SourceArg::Github => ActivitySource::Github,
        }
    }
}

/// Execute a CLI command (import, activity, or photos).
pub fn run(command: Command, config: &Config, conn: &mut Connection) -> Result<()> {
    match command {
        Command::Import { source, file } => handle_import(source.into(), &file, conn)?,
        Command::Activity {
            source,
            days,
            as_of,
        } => handle_activity(source.into(), days, as_of, config, conn)?,
        Command::Photos { theme } => handle_photos(theme, config)?,
    }
    Ok(())
}

fn handle_import(source: ActivitySource, file: &Path, conn: &mut Connection) -> Result<()> {
    let stored = match source {
        ActivitySource::Wakatime => db::upsert_activity_days(&feeds::read_wakatime(file)?, conn)?,
        ActivitySource::Github => db::upsert_contributions(&feeds::read_github(file)?, conn)?,
    };
    tracing::info!(source = source.as_str(), stored, file = %file.display(), "Imported feed");
    println!("Stored {stored} {} days.", source.as_str());
    Ok(())
}

fn handle_activity(
    source: ActivitySource,
    days: Option<u32>,
    as_of: Option<String>,
    config: &Config,
    conn: &Connection,
) -> Result<()> {
    let window_days = days.unwrap_or(config.window_days);
    let all = db::query_activities(source, conn)?;
    let selected = match parse_optional_date(as_of)? {
        Some(as_of) => activity::select_window(&all, window_days, as_of),
        None => activity::select_window_today(&all, window_days),
    };

    if selected.is_empty() {
        println!("No {} activity in the last {window_days} days.", source.as_str());
        return Ok(());
    }
    for day in &selected {
        println!("{}  {:>5}  {}", day.date, day.count, day.level.as_u8());
    }
    Ok(())
}

fn handle_photos(theme: Option<String>, config: &Config) -> Result<()> {
    let theme = match theme {
        Some(value) => value.parse::<Theme>()?,
        None => config.theme,
    };
    let catalog = photos::catalog(config, theme);
    if catalog.is_empty() {
        println!("No images found. Add images to {}/{theme}/", config.photos_dir.display());
        return Ok(());
    }
    for photo in catalog {
        let found = photos::resolve_path(&config.photos_dir, &photo.image_path).is_file();
        println!(
            "{:>3}  {}  {:<24}  {}",
            photo.id,
            if found { "ok     " } else { "missing" },
            photo.file_name,
            photo.image_path
        );
    }
    Ok(())
}

fn parse_optional_date(value: Option<String>) -> Result<Option<NaiveDate>> {
    match value {
        Some(s) => match activity::parse_date(&s) {
            Some(date) => Ok(Some(date)),
            None => anyhow::bail!("invalid date '{s}', expected YYYY-MM-DD"),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivityDay, ActivityLevel};

    #[test]
    fn parses_activity_flags() {
        let cli = Cli::try_parse_from([
            "bento", "activity", "--source", "github", "--days", "30", "--as-of", "2024-01-02",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Activity {
                source,
                days,
                as_of,
            }) => {
                assert_eq!(source, SourceArg::Github);
                assert_eq!(days, Some(30));
                assert_eq!(as_of.as_deref(), Some("2024-01-02"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_as_of() {
        assert!(parse_optional_date(Some("yesterday".to_string())).is_err());
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }

    #[test]
    fn loads_wakatime_days_as_classified_activity() {
        let mut conn = db::init_in_memory().unwrap();
        db::upsert_activity_days(
            &[ActivityDay {
                date: "2024-01-02".to_string(),
                total_seconds: 7200.0,
            }],
            &mut conn,
        )
        .unwrap();

        let activities = db::query_activities(ActivitySource::Wakatime, &conn).unwrap();
        assert_eq!(activities[0].count, 120);
        assert_eq!(activities[0].level, ActivityLevel::High);
        assert!(db::query_activities(ActivitySource::Github, &conn).unwrap().is_empty());
    }
}
