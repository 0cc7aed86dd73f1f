use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::app::PlaybackState;
use crate::error::{PlayerError, Result};

use super::sink::create_sink_at;
use super::types::{Engine, gain, seek_target};

/// `Engine` backed by the default output device.
///
/// The device is held for the lifetime of the engine and released on drop.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    // A freshly loaded sink sits paused until the first `play`; it is not "Paused".
    started: bool,
    // Where the current sink started inside the track; `get_pos` counts from there.
    offset: Duration,
    volume: f32,
}

impl RodioEngine {
    pub fn open() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped; that would land
        // in the middle of the terminal output.
        stream.log_on_drop(false);

        debug!("audio output opened");
        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            started: false,
            offset: Duration::ZERO,
            volume: 100.0,
        })
    }

    fn position(&self) -> Duration {
        self.offset + self.sink.as_ref().map_or(Duration::ZERO, Sink::get_pos)
    }
}

/// Status reported for a sink in the given condition.
///
/// `empty` is true when there is no sink or it has drained.
pub(super) fn status_of(started: bool, empty: bool, paused: bool) -> PlaybackState {
    match (started, empty, paused) {
        (true, false, true) => PlaybackState::Paused,
        (true, false, false) => PlaybackState::Playing,
        _ => PlaybackState::Stopped,
    }
}

/// Whether `play` has to decode the track again. `sink_empty` is `None`
/// when there is no sink at all.
pub(super) fn needs_rebuild(sink_empty: Option<bool>) -> bool {
    sink_empty.unwrap_or(true)
}

pub(super) fn can_pause(state: PlaybackState) -> bool {
    state == PlaybackState::Playing
}

pub(super) fn can_resume(state: PlaybackState) -> bool {
    state == PlaybackState::Paused
}

pub(super) fn can_seek(state: PlaybackState) -> bool {
    state != PlaybackState::Stopped
}

impl Engine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        let sink = create_sink_at(&self.stream, path, self.volume, Duration::ZERO)?;

        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        self.loaded = Some(path.to_path_buf());
        self.started = false;
        self.offset = Duration::ZERO;
        debug!(path = %path.display(), "track loaded");
        Ok(())
    }

    fn play(&mut self) {
        let Some(path) = self.loaded.as_deref() else {
            return;
        };

        // After `stop` or a natural end the old sink is gone or drained.
        if needs_rebuild(self.sink.as_ref().map(Sink::empty)) {
            match create_sink_at(&self.stream, path, self.volume, Duration::ZERO) {
                Ok(sink) => {
                    self.sink = Some(sink);
                    self.offset = Duration::ZERO;
                }
                Err(e) => {
                    warn!(error = %e, "cannot restart track");
                    return;
                }
            }
        }

        if let Some(sink) = &self.sink {
            sink.set_volume(gain(self.volume));
            sink.play();
            self.started = true;
        }
    }

    fn pause(&mut self) {
        if !can_pause(self.status()) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if !can_resume(self.status()) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.started = false;
        self.offset = Duration::ZERO;
    }

    fn set_volume(&mut self, percent: f32) {
        self.volume = percent.clamp(0.0, 100.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(gain(self.volume));
        }
    }

    fn status(&self) -> PlaybackState {
        match &self.sink {
            Some(sink) => status_of(self.started, sink.empty(), sink.is_paused()),
            None => status_of(self.started, true, false),
        }
    }

    fn seek_by(&mut self, seconds: i64) -> Result<Option<Duration>> {
        let state = self.status();
        if !can_seek(state) {
            return Ok(None);
        }
        let Some(path) = self.loaded.as_deref() else {
            return Ok(None);
        };

        // Rebuild the sink and skip into the file.
        let target = seek_target(self.position(), seconds);
        let sink = create_sink_at(&self.stream, path, self.volume, target)?;
        if state == PlaybackState::Playing {
            sink.play();
        }
        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        self.offset = target;
        debug!(position = ?target, "seeked");
        Ok(Some(target))
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        debug!("audio output released");
    }
}
