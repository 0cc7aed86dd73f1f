//! Last-played track persistence.
//!
//! The state file holds one decimal integer and nothing else.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PlayerError, Result};

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last saved index. A missing or garbled file means "no prior state".
    pub fn load(&self) -> Option<usize> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no saved track index");
                return None;
            }
        };

        match raw.trim().parse::<usize>() {
            Ok(i) => Some(i),
            Err(_) => {
                debug!(path = %self.path.display(), content = raw.trim(), "ignoring unparsable state file");
                None
            }
        }
    }

    /// Overwrite the state file with `index`.
    pub fn save(&self, index: usize) -> Result<()> {
        fs::write(&self.path, index.to_string()).map_err(|source| PlayerError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}
