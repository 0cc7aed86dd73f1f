//! Engine trait and volume/position helpers shared by the audio subsystem.

use std::path::Path;
use std::time::Duration;

use crate::app::PlaybackState;
use crate::error::Result;

/// A player for a single loaded audio stream.
///
/// `status` must report the real decoder state: a stream that ran out on its
/// own is `Stopped` even though nobody called `stop`.
pub trait Engine {
    /// Open and decode `path`, replacing whatever was loaded before.
    fn load(&mut self, path: &Path) -> Result<()>;
    /// Start (or restart from the beginning after `stop`) the loaded stream.
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Halt output and rewind to the start.
    fn stop(&mut self);
    /// Volume in percent, 0 to 100.
    fn set_volume(&mut self, percent: f32);
    fn status(&self) -> PlaybackState;
    /// Move the play position by `seconds` (negative rewinds), keeping the
    /// paused/playing state. Returns the new position, or `None` when nothing
    /// is playing or paused.
    fn seek_by(&mut self, seconds: i64) -> Result<Option<Duration>>;
}

/// Map a 0..=100 percentage to the linear gain `rodio` expects.
pub fn gain(percent: f32) -> f32 {
    percent.clamp(0.0, 100.0) / 100.0
}

/// Position after moving `seconds` from `position`, never before the start.
pub fn seek_target(position: Duration, seconds: i64) -> Duration {
    let step = Duration::from_secs(seconds.unsigned_abs());
    if seconds < 0 {
        position.saturating_sub(step)
    } else {
        position.saturating_add(step)
    }
}
