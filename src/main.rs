pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod prompt;
pub mod utils;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};

use crate::{
    app::App,
    cli::Cli,
    config::Config,
    utils::{initialize_logging, initialize_panic_handler},
};

fn run() -> Result<()> {
    let _cli = Cli::parse();

    if let Err(e) = initialize_panic_handler() {
        eprintln!("{} warning: panic handler not installed: {e}", env!("CARGO_PKG_NAME"));
    }

    // Config and logging problems never cost the user their card
    let (config, config_error) = match Config::new() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Err(e) = initialize_logging(&config.log_level) {
        eprintln!("{} warning: logging disabled: {e}", env!("CARGO_PKG_NAME"));
    }
    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {e}");
    } else if !config.has_user_file() {
        info!("No user configuration file found, using defaults");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = App::new();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
