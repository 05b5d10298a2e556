use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// A captured step image found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotAsset {
    pub file_name: String,
    #[serde(skip)]
    pub path: PathBuf,
}

impl ScreenshotAsset {
    pub fn new(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self { file_name, path })
    }

    /// Human-readable label: extension stripped, dashes turned into spaces.
    ///
    /// `02-username-entered-pwshizz.png` -> `02 username entered pwshizz`
    pub fn step_label(&self) -> String {
        let stem = match self.file_name.rsplit_once('.') {
            Some((stem, ext)) if is_image_extension(ext) => stem,
            _ => self.file_name.as_str(),
        };
        stem.replace('-', " ")
    }
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

/// Whether a file name carries one of the recognised image extensions.
pub fn is_image_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && is_image_extension(ext))
}

/// List image files in `dir`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list; the report is
/// still produced, just without screenshots.
pub fn discover_screenshots(dir: &Path) -> Vec<ScreenshotAsset> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Screenshots directory {} unavailable, continuing without screenshots: {}",
                dir.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut assets: Vec<ScreenshotAsset> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| ScreenshotAsset::new(entry.path()))
        .filter(|asset| is_image_file(&asset.file_name))
        .collect();

    // Lexicographic order drives the gallery and the NN- step numbering
    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    info!("Found {} screenshots in {}", assets.len(), dir.display());
    assets
}
