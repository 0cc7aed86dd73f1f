//! Error type shared by every layer of the player.
//!
//! Only catalog, device and terminal failures are fatal; everything else is
//! reported on one line by the command loop and playback carries on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The music directory could not be listed.
    #[error("cannot read music directory {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A track is missing, unreadable or in a format the decoder rejects.
    #[error("error loading track {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid track index {index} (catalog has {len} tracks)")]
    InvalidIndex { index: usize, len: usize },

    #[error("no tracks in catalog")]
    EmptyCatalog,

    /// Writing the last-track state file failed.
    #[error("cannot write state file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no audio output device: {0}")]
    Device(String),

    /// Raw mode or key input failed.
    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

pub type Result<T, E = PlayerError> = std::result::Result<T, E>;
