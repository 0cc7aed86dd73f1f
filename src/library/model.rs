use std::path::{Path, PathBuf};

/// A playable audio file. Identity is the path exactly as it was scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text used in listings and status lines.
    pub fn display(&self) -> String {
        self.path.display().to_string()
    }
}
