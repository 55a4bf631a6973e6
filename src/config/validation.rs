use log::warn;

use crate::config::TocConfig;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// Validate the configuration before any scanning starts
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_input(config)?;
    validate_output(config)?;
    Ok(())
}

/// The input must be an existing regular file
fn validate_input(config: &TocConfig) -> BoxResult<()> {
    let input = &config.input;

    if !input.exists() {
        return Err(TocError::Config(format!(
            "Input file does not exist: {}", input.display()
        )).into());
    }

    if !fs::is_file(input) {
        return Err(TocError::Config(format!(
            "Input path is not a file: {}", input.display()
        )).into());
    }

    Ok(())
}

/// A missing parent directory is left for the write to report
fn validate_output(config: &TocConfig) -> BoxResult<()> {
    let output = &config.output;

    if fs::is_directory(output) {
        return Err(TocError::Config(format!(
            "Output path is a directory: {}", output.display()
        )).into());
    }

    if output == &config.input {
        warn!("Output path is the input file; {} will be overwritten", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    fn config_error(config: &TocConfig) -> String {
        let err = validate_config(config).unwrap_err();
        match err.downcast_ref::<TocError>() {
            Some(TocError::Config(msg)) => msg.clone(),
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        std_fs::write(&input, "## A\n").unwrap();

        let config = TocConfig::new(&input, dir.path().join("toc.md"));
        assert!(validate_config(&config).is_ok());

        // Output into a missing directory is not rejected up front
        let config = TocConfig::new(&input, dir.path().join("missing").join("toc.md"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let config = TocConfig::new(dir.path().join("nope.md"), dir.path().join("toc.md"));

        assert!(config_error(&config).starts_with("Input file does not exist"));
    }

    #[test]
    fn test_input_is_directory() {
        let dir = tempdir().unwrap();
        let config = TocConfig::new(dir.path(), dir.path().join("toc.md"));

        assert!(config_error(&config).starts_with("Input path is not a file"));
    }

    #[test]
    fn test_output_is_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        std_fs::write(&input, "## A\n").unwrap();

        let config = TocConfig::new(&input, dir.path());
        assert!(config_error(&config).starts_with("Output path is a directory"));
    }
}
