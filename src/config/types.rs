use std::path::PathBuf;
use log::LevelFilter;

/// Settings for a single table-of-contents run
#[derive(Debug, Clone, PartialEq)]
pub struct TocConfig {
    /// Markdown document to scan
    pub input: PathBuf,

    /// Where the generated list is written
    pub output: PathBuf,

    /// Log verbosity for the run
    pub log_level: LevelFilter,
}

impl TocConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input: I, output: O) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            log_level: LevelFilter::Info,
        }
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
