use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type CardId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("unknown theme '{other}', expected light or dark"),
        }
    }
}

/// One entry of a theme's photo catalog, before it becomes a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoSource {
    pub id: CardId,
    pub image_path: String,
    pub alt: String,
    pub file_name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

///A single photo tile of the card stack
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub image_path: String,
    pub alt: String,
    /// Tilt in degrees.
    pub rotation: f64,
    pub load_state: LoadState,
}

/// Raw tracked time for a single calendar day.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityDay {
    pub date: String,
    pub total_seconds: f64,
}

/// Heatmap intensity bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityLevel {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Peak = 4,
}

impl ActivityLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ActivityLevel::None),
            1 => Ok(ActivityLevel::Low),
            2 => Ok(ActivityLevel::Medium),
            3 => Ok(ActivityLevel::High),
            4 => Ok(ActivityLevel::Peak),
            other => Err(format!("activity level {other} is outside 0..=4")),
        }
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.as_u8()
    }
}

/// A classified day, ready for the heatmap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    pub count: u32,
    pub level: ActivityLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivitySource {
    Wakatime,
    Github,
}

impl ActivitySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivitySource::Wakatime => "wakatime",
            ActivitySource::Github => "github",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub url: String,
}
