pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::process::ExitCode;

use crate::config;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    let config = config::config_from_cli(&cli);
    logging::init_logging(config.log_level);

    let config = match config::load_config(config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if commands::handle_generate_command(&config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
