use log::debug;

use crate::cli::logging::level_for;
use crate::cli::types::Cli;
use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::BoxResult;

/// Build the run configuration from parsed command-line arguments.
///
/// Nothing touches the file system here, so the result can be used to
/// install the logger before `load_config` reports any problem.
pub fn config_from_cli(cli: &Cli) -> TocConfig {
    TocConfig::new(&cli.input, &cli.output).with_log_level(level_for(cli.debug, cli.quiet))
}

/// Validate the configuration and hand it back ready to run
pub fn load_config(config: TocConfig) -> BoxResult<TocConfig> {
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}
