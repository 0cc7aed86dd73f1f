//! Terminal input: single keystrokes read in raw mode and the key bindings.

mod keys;
mod raw;

pub use keys::*;
pub use raw::*;
