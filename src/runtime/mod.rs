use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::app::App;
use crate::audio::RodioEngine;

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let _log_guard = logging::init_logging(&settings.log);

    let dir = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let engine = RodioEngine::open()?;
    let mut app = App::initialize(&dir, engine, &settings)?;

    print!("{}", startup::track_listing(app.tracks()));
    print!("{}", startup::help_banner());

    event_loop::run(&mut app, &settings)?;

    // Dropping `app` stops the sink and releases the output device.
    drop(app);
    info!("bye");
    Ok(())
}
