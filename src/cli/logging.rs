use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command-line flags; `debug` wins over `quiet`
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) -> LevelFilter {
    // A logger can only be installed once per process
    let _ = SimpleLogger::new()
        .with_level(level)
        .init();

    level
}
