//! Playback engine: one loaded stream at a time, decoded and played by `rodio`.
//!
//! `Engine` is the seam the controller talks to; `RodioEngine` drives the
//! real output device.

mod player;
mod sink;
mod types;

pub use player::RodioEngine;
pub use types::*;
