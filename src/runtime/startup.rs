use crate::input::BINDINGS;
use crate::library::Track;

/// The numbered track listing printed at startup (1-based).
pub fn track_listing(tracks: &[Track]) -> String {
    let mut out = String::from("Available tracks:\n");
    if tracks.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, track) in tracks.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, track.display()));
    }
    out
}

/// The static help banner listing every key binding.
pub fn help_banner() -> String {
    let mut out = String::from("Use the following keys for control:\n");
    for (key, action) in BINDINGS {
        out.push_str(&format!("{key} - {action}\n"));
    }
    out
}
