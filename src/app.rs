//! Application module: exposes the player controller used by the runtime.
//!
//! The `App` controller lives in `app::model` and holds the catalog,
//! selection and playback flags.

mod model;

pub use model::*;
