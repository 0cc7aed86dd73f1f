use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{PlayerError, Result};

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, in enumeration order.
///
/// Subdirectories are never entered. Failing to open `dir` itself is an
/// error; a single unreadable entry is logged and skipped.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>> {
    let mut tracks: Vec<Track> = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // Depth 0 is the root itself: nothing to play without it.
            Err(e) if e.depth() == 0 => {
                return Err(PlayerError::Catalog {
                    path: dir.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            tracks.push(Track::new(path));
        }
    }

    debug!(dir = %dir.display(), count = tracks.len(), "catalog scanned");
    Ok(tracks)
}
