/// Dashboard configuration stored as TOML in the user's config directory.
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{Song, Theme};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Root holding `light/` and `dark/` image folders.
    #[serde(default = "default_photos_dir")]
    pub photos_dir: PathBuf,

    #[serde(default)]
    pub theme: Theme,

    /// Maximum card tilt in degrees.
    #[serde(default = "default_rotation_factor")]
    pub rotation_factor: f64,

    /// Rows between stacked cards.
    #[serde(default = "default_card_offset")]
    pub card_offset: u16,

    #[serde(default = "default_max_photos")]
    pub max_photos: usize,

    /// Cycle `photo_files` when no images are found on disk, instead of guessing names.
    #[serde(default = "default_use_auto_generation")]
    pub use_auto_generation: bool,

    #[serde(default)]
    pub photo_files: PerTheme<String>,

    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Window used when the terminal is too narrow for the full calendar.
    #[serde(default = "default_narrow_window_days")]
    pub narrow_window_days: u32,

    #[serde(default = "default_tech_stack")]
    pub tech_stack: Vec<String>,

    /// Seconds for one full marquee cycle.
    #[serde(default = "default_marquee_speed")]
    pub marquee_speed: u32,

    #[serde(default)]
    pub songs: PerTheme<Song>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerTheme<T> {
    #[serde(default = "Vec::new")]
    pub light: Vec<T>,
    #[serde(default = "Vec::new")]
    pub dark: Vec<T>,
}

impl<T> PerTheme<T> {
    pub fn for_theme(&self, theme: Theme) -> &[T] {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for PerTheme<String> {
    fn default() -> Self {
        let names = |files: &[&str]| files.iter().map(|f| f.to_string()).collect();
        Self {
            light: names(&["makoto.jpg", "anna.jpg", "ayaka.png", "akane.jpg", "yoshino.jpg", "chino.jpg"]),
            dark: names(&[
                "kana.jpg",
                "topaz.jpg",
                "chisato.jpg",
                "yoshizawa.jpg",
                "kotori.jpg",
                "02.jpg",
                "asuka.jpg",
            ]),
        }
    }
}

impl Default for PerTheme<Song> {
    fn default() -> Self {
        let song = |name: &str, artist: &str, album: &str| Song {
            name: name.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            url: String::new(),
        };
        Self {
            light: vec![
                song("Color Your Night", "Lotus Juice, Azumi Takahashi", "Persona 3 Reload"),
                song("Full Moon Full Life", "Azumi Takahashi, Lotus Juice", "Persona 3 Reload"),
                song(
                    "When The Moon's Reaching Out Stars -Reload-",
                    "Atlus Sound Team",
                    "Persona 3 Reload",
                ),
            ],
            dark: vec![
                song("Beneath the Mask -rain-", "Lyn", "Persona 5"),
                song("Break it Down", "Shoji Meguro", "Persona 5"),
                song("The Whims of Fate", "Lyn", "Persona 5"),
                song("Life Goes On", "Shoji Meguro", "Persona 5"),
            ],
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bento")
}

fn default_db_path() -> PathBuf {
    data_dir().join("bento.db")
}

fn default_photos_dir() -> PathBuf {
    data_dir().join("images")
}

fn default_rotation_factor() -> f64 {
    8.0
}

fn default_card_offset() -> u16 {
    1
}

fn default_max_photos() -> usize {
    6
}

fn default_use_auto_generation() -> bool {
    true
}

fn default_window_days() -> u32 {
    133
}

fn default_narrow_window_days() -> u32 {
    60
}

fn default_tech_stack() -> Vec<String> {
    [
        "Python", "TypeScript", "React", "Astro", "Tailwind", "Vite", "Git", "Docker", "PyTorch",
        "C++", "LaTeX", "Typst", "Blender",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_marquee_speed() -> u32 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            photos_dir: default_photos_dir(),
            theme: Theme::default(),
            rotation_factor: default_rotation_factor(),
            card_offset: default_card_offset(),
            max_photos: default_max_photos(),
            use_auto_generation: default_use_auto_generation(),
            photo_files: PerTheme::<String>::default(),
            window_days: default_window_days(),
            narrow_window_days: default_narrow_window_days(),
            tech_stack: default_tech_stack(),
            marquee_speed: default_marquee_speed(),
            songs: PerTheme::<Song>::default(),
        }
    }
}

impl Config {
    /// Load the config file, writing the defaults first when none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            Self::from_toml(&content).with_context(|| format!("parsing {}", config_path.display()))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        tracing::info!(path = %config_path.display(), "Wrote default config");
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bento")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.rotation_factor, 8.0);
        assert_eq!(config.window_days, 133);
        assert_eq!(config.narrow_window_days, 60);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.songs.dark.len(), 4);
        assert_eq!(config.photo_files.light[0], "makoto.jpg");
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = Config::from_toml(
            r#"
            theme = "dark"
            rotation_factor = 4.5
            max_photos = 3

            [photo_files]
            dark = ["cover.jpeg"]
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.rotation_factor, 4.5);
        assert_eq!(config.max_photos, 3);
        assert_eq!(config.photo_files.dark, vec!["cover.jpeg".to_string()]);
        assert!(config.photo_files.light.is_empty());
    }

    #[test]
    fn songs_for_one_theme_leave_the_other_empty() {
        let config = Config::from_toml(
            r#"
            [[songs.dark]]
            name = "Life Goes On"
            artist = "Shoji Meguro"
            "#,
        )
        .unwrap();
        assert_eq!(config.songs.dark.len(), 1);
        assert_eq!(config.songs.dark[0].name, "Life Goes On");
        assert!(config.songs.dark[0].album.is_empty());
        assert!(config.songs.light.is_empty());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.tech_stack, config.tech_stack);
        assert_eq!(parsed.songs, config.songs);
        assert_eq!(parsed.photos_dir, config.photos_dir);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::from_toml("theme = \"sepia\"").is_err());
    }
}
