//! Application model types: `App` and `PlaybackState`.
//!
//! `App` is the player controller. It owns the catalog, the engine and the
//! state store, and decides which track plays next.

use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::audio::Engine;
use crate::config::{PlaybackSettings, Settings};
use crate::error::{PlayerError, Result};
use crate::library::{Track, scan};
use crate::state::StateStore;

/// The playback state of the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The player controller.
pub struct App<E: Engine> {
    tracks: Vec<Track>,
    engine: E,
    store: StateStore,
    rng: StdRng,

    current: Option<usize>,
    loop_enabled: bool,
    shuffle: bool,
    auto_advance: bool,
    volume: f32,
    // Volume to restore on unmute; `Some` while muted.
    muted_volume: Option<f32>,

    // Set once we start a track; lets `tick` tell a natural end from `stop`.
    awaiting_end: bool,
}

impl<E: Engine> App<E> {
    /// Scan `dir` and build a controller seeded from the persisted state file.
    pub fn initialize(dir: &Path, engine: E, settings: &Settings) -> Result<Self> {
        let tracks = scan(dir, &settings.library)?;
        info!(dir = %dir.display(), tracks = tracks.len(), "catalog ready");

        let store = StateStore::new(&settings.state.file);
        Ok(Self::new(tracks, engine, store, &settings.playback))
    }

    /// Create a controller over `tracks`. Nothing is played yet.
    pub fn new(
        tracks: Vec<Track>,
        engine: E,
        store: StateStore,
        playback: &PlaybackSettings,
    ) -> Self {
        let current = match store.load() {
            Some(i) if i < tracks.len() => Some(i),
            Some(i) => {
                warn!(
                    index = i,
                    tracks = tracks.len(),
                    state = %store.path().display(),
                    "saved track index out of range, ignoring"
                );
                None
            }
            None => None,
        };

        let rng = match playback.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            tracks,
            engine,
            store,
            rng,
            current,
            loop_enabled: playback.loop_enabled,
            shuffle: playback.shuffle,
            auto_advance: playback.auto_advance,
            volume: playback.volume.clamp(0.0, 100.0),
            muted_volume: None,
            awaiting_end: false,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted_volume.is_some()
    }

    pub fn status(&self) -> PlaybackState {
        self.engine.status()
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Load and start track `index`, then remember it in the state file.
    ///
    /// On any error the current index is left untouched.
    pub fn play(&mut self, index: usize) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        let track = self
            .tracks
            .get(index)
            .ok_or(PlayerError::InvalidIndex { index, len })?;

        self.engine.load(track.path())?;
        self.current = Some(index);

        if let Err(e) = self.store.save(index) {
            warn!(error = %e, "could not remember last track");
        }

        self.engine.set_volume(self.volume);
        self.engine.play();
        self.awaiting_end = true;
        info!(index, track = %track.display(), "playing");
        Ok(())
    }

    /// Play the current (or persisted) track, the first one when there is none.
    pub fn play_current(&mut self) -> Result<usize> {
        let index = self.current.unwrap_or(0);
        self.play(index)?;
        Ok(index)
    }

    /// Returns true when playback was actually paused.
    pub fn pause(&mut self) -> bool {
        if self.engine.status() != PlaybackState::Playing {
            return false;
        }
        self.engine.pause();
        true
    }

    /// Returns true when paused playback was actually resumed.
    pub fn resume(&mut self) -> bool {
        if self.engine.status() != PlaybackState::Paused {
            return false;
        }
        self.engine.resume();
        true
    }

    /// Pause when playing, resume when paused, and start the current track
    /// when stopped. Returns the resulting state.
    pub fn toggle_pause(&mut self) -> Result<PlaybackState> {
        match self.engine.status() {
            PlaybackState::Playing => {
                self.engine.pause();
                Ok(PlaybackState::Paused)
            }
            PlaybackState::Paused => {
                self.engine.resume();
                Ok(PlaybackState::Playing)
            }
            PlaybackState::Stopped => {
                self.play_current()?;
                Ok(PlaybackState::Playing)
            }
        }
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.awaiting_end = false;
    }

    /// Jump `seconds` forward (or back when negative) in the current track.
    ///
    /// Returns the new position, or `None` when nothing is playing or paused.
    pub fn seek(&mut self, seconds: i64) -> Result<Option<Duration>> {
        if self.engine.status() == PlaybackState::Stopped {
            return Ok(None);
        }
        let position = self.engine.seek_by(seconds)?;
        debug!(seconds, ?position, "seek");
        Ok(position)
    }

    /// Advance one track, or jump to a random one when shuffle is on.
    pub fn next(&mut self) -> Result<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }

        let index = if self.shuffle {
            self.rng.gen_range(0..len)
        } else {
            self.current.map_or(0, |i| (i + 1) % len)
        };
        self.play(index)?;
        Ok(index)
    }

    pub fn previous(&mut self) -> Result<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }

        let index = self.current.map_or(len - 1, |i| (i + len - 1) % len);
        self.play(index)?;
        Ok(index)
    }

    /// Flip the loop flag and return its new value.
    pub fn toggle_loop(&mut self) -> bool {
        self.loop_enabled = !self.loop_enabled;
        debug!(enabled = self.loop_enabled, "loop toggled");
        self.loop_enabled
    }

    /// Flip the shuffle flag and return its new value.
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        debug!(enabled = self.shuffle, "shuffle toggled");
        self.shuffle
    }

    /// Set the volume, clamped to 0..=100, and apply it right away.
    ///
    /// Any explicit volume change ends a mute.
    pub fn set_volume(&mut self, percent: f32) -> f32 {
        self.muted_volume = None;
        self.volume = percent.clamp(0.0, 100.0);
        self.engine.set_volume(self.volume);
        self.volume
    }

    pub fn adjust_volume(&mut self, delta: f32) -> f32 {
        self.set_volume(self.volume + delta)
    }

    /// Silence output, or bring back the volume from before muting.
    /// Returns true when now muted.
    pub fn toggle_mute(&mut self) -> bool {
        match self.muted_volume.take() {
            Some(previous) => {
                self.set_volume(previous);
                false
            }
            None => {
                self.muted_volume = Some(self.volume);
                self.volume = 0.0;
                self.engine.set_volume(0.0);
                true
            }
        }
    }

    /// Check for a track that ran out on its own.
    ///
    /// With loop on the same track starts again; with auto-advance the next
    /// one does. Returns the index that was started, if any.
    pub fn tick(&mut self) -> Result<Option<usize>> {
        if !self.awaiting_end || self.engine.status() != PlaybackState::Stopped {
            return Ok(None);
        }
        self.awaiting_end = false;

        let Some(current) = self.current else {
            return Ok(None);
        };

        if self.loop_enabled {
            debug!(index = current, "track finished, looping");
            self.play(current)?;
            Ok(Some(current))
        } else if self.auto_advance {
            debug!(index = current, "track finished, advancing");
            self.next().map(Some)
        } else {
            info!(index = current, "track finished");
            Ok(None)
        }
    }
}
