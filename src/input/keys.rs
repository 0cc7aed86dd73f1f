use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the player to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    TogglePause,
    Stop,
    Next,
    Previous,
    PlayCurrent,
    ToggleLoop,
    ToggleShuffle,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    SeekBack,
    SeekForward,
    Status,
    Quit,
}

/// Key bindings, in the order they are listed in the help banner.
pub const BINDINGS: &[(&str, &str)] = &[
    ("P", "Pause"),
    ("R", "Resume"),
    ("N", "Next"),
    ("B", "Previous"),
    ("L", "Toggle Loop"),
    ("S", "Toggle Shuffle"),
    ("+", "Increase Volume"),
    ("-", "Decrease Volume"),
    ("M", "Toggle Mute"),
    (",", "Rewind"),
    (".", "Forward"),
    ("Space", "Play/Pause"),
    ("X", "Stop"),
    ("Enter", "Play current track"),
    ("I", "Show status"),
    ("Q", "Quit"),
];

/// Map a key press to a command. Letters are case-insensitive.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    // Raw mode turns Ctrl-C into an ordinary key press.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Command::PlayCurrent),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'p' => Some(Command::Pause),
            'r' => Some(Command::Resume),
            'n' => Some(Command::Next),
            'b' => Some(Command::Previous),
            'l' => Some(Command::ToggleLoop),
            's' => Some(Command::ToggleShuffle),
            '+' => Some(Command::VolumeUp),
            '-' => Some(Command::VolumeDown),
            'm' => Some(Command::ToggleMute),
            ',' => Some(Command::SeekBack),
            '.' => Some(Command::SeekForward),
            ' ' => Some(Command::TogglePause),
            'x' => Some(Command::Stop),
            'i' => Some(Command::Status),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}
