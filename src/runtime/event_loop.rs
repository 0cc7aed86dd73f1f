use std::io::{self, Write};
use std::time::Duration;

use tracing::{info, warn};

use crate::app::{App, PlaybackState};
use crate::audio::Engine;
use crate::config::{self, PlaybackSettings};
use crate::error::{PlayerError, Result};
use crate::input::{self, Command, RawMode};

/// Main command loop: one key per iteration, then a check for a finished
/// track. Returns `Ok(())` when quit is requested.
///
/// The terminal stays in raw mode until the loop returns.
pub fn run<E: Engine>(app: &mut App<E>, settings: &config::Settings) -> Result<()> {
    let poll = Duration::from_millis(settings.input.poll_interval_ms);
    let _raw = RawMode::enter().map_err(PlayerError::Terminal)?;

    loop {
        if let Some(key) = input::next_key(poll).map_err(PlayerError::Terminal)? {
            match input::command_for(key) {
                Some(Command::Quit) => {
                    info!("quit requested");
                    return Ok(());
                }
                Some(cmd) => {
                    if let Some(line) = dispatch(app, cmd, &settings.playback) {
                        say(&line);
                    }
                }
                None => say("Invalid key!"),
            }
        }

        match app.tick() {
            Ok(Some(_)) => say(&now_playing(app)),
            Ok(None) => {}
            Err(e) => say(&report(&e)),
        }
    }
}

fn say(line: &str) {
    let mut out = io::stdout().lock();
    let _ = out.write_all(input::raw_line(line).as_bytes());
    let _ = out.flush();
}

/// Apply `cmd` to the controller and return the line to show the user.
pub fn dispatch<E: Engine>(
    app: &mut App<E>,
    cmd: Command,
    playback: &PlaybackSettings,
) -> Option<String> {
    let seek_step = i64::try_from(playback.seek_seconds).unwrap_or(i64::MAX);

    match cmd {
        Command::Pause => app.pause().then(|| "Music paused.".to_string()),
        Command::Resume => app.resume().then(|| "Resuming music.".to_string()),
        Command::TogglePause => Some(toggle_pause(app)),
        Command::Stop => {
            app.stop();
            Some("Music stopped.".to_string())
        }
        Command::Next => Some(track_change(app, App::next)),
        Command::Previous => Some(track_change(app, App::previous)),
        Command::PlayCurrent => Some(track_change(app, App::play_current)),
        Command::ToggleLoop => Some(format!("Loop mode: {}", on_off(app.toggle_loop()))),
        Command::ToggleShuffle => Some(format!("Shuffle mode: {}", on_off(app.toggle_shuffle()))),
        Command::VolumeUp => Some(volume_line(app.adjust_volume(playback.volume_step))),
        Command::VolumeDown => Some(volume_line(app.adjust_volume(-playback.volume_step))),
        Command::ToggleMute => Some(if app.toggle_mute() {
            "Mute: ON".to_string()
        } else {
            format!("Mute: OFF, {}", volume_line(app.volume()))
        }),
        Command::SeekBack => seek(app, -seek_step),
        Command::SeekForward => seek(app, seek_step),
        Command::Status => Some(status_line(app)),
        Command::Quit => None,
    }
}

fn track_change<E: Engine>(
    app: &mut App<E>,
    change: fn(&mut App<E>) -> Result<usize>,
) -> String {
    match change(app) {
        Ok(_) => now_playing(app),
        Err(e) => report(&e),
    }
}

fn toggle_pause<E: Engine>(app: &mut App<E>) -> String {
    let before = app.status();
    match app.toggle_pause() {
        Ok(PlaybackState::Paused) => "Music paused.".to_string(),
        Ok(_) if before == PlaybackState::Paused => "Resuming music.".to_string(),
        Ok(_) => now_playing(app),
        Err(e) => report(&e),
    }
}

fn seek<E: Engine>(app: &mut App<E>, seconds: i64) -> Option<String> {
    match app.seek(seconds) {
        Ok(Some(position)) => Some(format!("Position: {}", clock(position))),
        Ok(None) => None,
        Err(e) => Some(report(&e)),
    }
}

fn now_playing<E: Engine>(app: &App<E>) -> String {
    match app.current_track() {
        Some(track) => format!("Playing: {}", track.display()),
        None => "Nothing playing.".to_string(),
    }
}

fn status_line<E: Engine>(app: &App<E>) -> String {
    let state = match app.status() {
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
        PlaybackState::Stopped => "Stopped",
    };
    let track = app
        .current_track()
        .map_or_else(|| "-".to_string(), |t| t.display());
    let volume = if app.muted() {
        "muted".to_string()
    } else {
        format!("{}%", app.volume())
    };

    format!(
        "{state}: {track} | Volume: {volume} | Loop: {} | Shuffle: {}",
        on_off(app.loop_enabled()),
        on_off(app.shuffle())
    )
}

fn report(e: &PlayerError) -> String {
    warn!(error = %e, "command failed");
    match e {
        PlayerError::InvalidIndex { .. } => format!("Invalid track index! ({e})"),
        PlayerError::EmptyCatalog => "No tracks to play!".to_string(),
        _ => e.to_string(),
    }
}

/// `m:ss` for a play position.
fn clock(position: Duration) -> String {
    let secs = position.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn volume_line(volume: f32) -> String {
    format!("Volume set to: {volume}%")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}
