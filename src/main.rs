mod app;
mod audio;
mod config;
mod error;
mod input;
mod library;
mod runtime;
mod state;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
