/// Photo catalogs per theme: what seeds the card stack.
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::types::{PhotoSource, Theme};

const PATTERN_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
const PATTERNS: &[&str] = &["photo{n}", "image{n}", "pic{n}", "{n}"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

fn photo(theme: Theme, id: u32, file_name: &str, alt: String) -> PhotoSource {
    PhotoSource {
        id,
        image_path: format!("/images/{theme}/{file_name}"),
        alt,
        file_name: file_name.to_string(),
    }
}

/// Guess file names from common patterns (`photo1.jpg`, `image1.png`, ...) until `max_photos`.
pub fn pattern_photos(theme: Theme, max_photos: usize) -> Vec<PhotoSource> {
    (1..=max_photos)
        .flat_map(|n| {
            PATTERNS.iter().flat_map(move |pattern| {
                PATTERN_EXTENSIONS
                    .iter()
                    .map(move |ext| format!("{}.{ext}", pattern.replace("{n}", &n.to_string())))
            })
        })
        .take(max_photos)
        .enumerate()
        .map(|(index, file_name)| {
            let alt = format!("{theme} theme {file_name}");
            photo(theme, index as u32 + 1, &file_name, alt)
        })
        .collect()
}

/// Fill `max_photos` slots by cycling through the known files.
pub fn cycled_photos(theme: Theme, files: &[String], max_photos: usize) -> Vec<PhotoSource> {
    if files.is_empty() {
        return Vec::new();
    }
    (0..max_photos)
        .map(|index| {
            let file_name = &files[index % files.len()];
            let alt = format!("{theme} theme {file_name} ({})", index + 1);
            photo(theme, index as u32 + 1, file_name, alt)
        })
        .collect()
}

/// Image files directly inside `root/<theme>/`, sorted by file name.
pub fn discover_photos(root: &Path, theme: Theme) -> Vec<PhotoSource> {
    let dir = root.join(theme.as_str());
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<String> = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_image(entry.path()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();

    files
        .iter()
        .enumerate()
        .map(|(index, file_name)| {
            let alt = format!("{theme} theme {file_name}");
            photo(theme, index as u32 + 1, file_name, alt)
        })
        .collect()
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// The catalog for `theme`: files on disk first, then the configured names, then guessed names.
pub fn catalog(config: &Config, theme: Theme) -> Vec<PhotoSource> {
    let discovered = discover_photos(&config.photos_dir, theme);
    if !discovered.is_empty() {
        tracing::debug!(%theme, count = discovered.len(), "Using photos found on disk");
        return discovered;
    }

    let photos = if config.use_auto_generation {
        cycled_photos(theme, config.photo_files.for_theme(theme), config.max_photos)
    } else {
        pattern_photos(theme, config.max_photos)
    };
    tracing::debug!(%theme, count = photos.len(), "Using generated photo catalog");
    photos
}

/// Map a catalog path (`/images/<theme>/<file>`) onto the configured photos directory.
pub fn resolve_path(photos_dir: &Path, image_path: &str) -> std::path::PathBuf {
    let relative = image_path
        .trim_start_matches('/')
        .strip_prefix("images/")
        .unwrap_or(image_path.trim_start_matches('/'));
    photos_dir.join(relative)
}
