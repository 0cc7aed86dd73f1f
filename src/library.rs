//! Track catalog: the flat list of audio files found in one directory.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
