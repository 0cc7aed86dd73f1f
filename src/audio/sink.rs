//! Utilities for creating `rodio` sinks from track paths.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested volume and start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::{PlayerError, Result};

use super::types::gain;

/// Open and decode `path` without touching the output device.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path).map_err(|e| PlayerError::Load {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Load {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Create a paused `Sink` for `path` on `stream` at `volume` percent, starting
/// `start_at` into the track.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
    start_at: Duration,
) -> Result<Sink> {
    // `skip_duration` is the seek primitive; `Duration::ZERO` plays from the top.
    let source = open_source(path)?.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(gain(volume));
    sink.append(source);
    sink.pause();
    Ok(sink)
}
