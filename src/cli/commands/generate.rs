use log::{error, info};

use crate::config::TocConfig;
use crate::toc;
use crate::utils::error::TocError;
use crate::utils::fs;

/// Handle the generate command. Returns whether the list was written.
pub fn handle_generate_command(config: &TocConfig) -> bool {
    info!("Input: {}, output: {}", config.input.display(), config.output.display());

    match generate(config) {
        Ok(_) => {
            info!("Table of contents saved to {}", config.output.display());
            true
        }
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

/// Build the table of contents for `config.input` and write it to
/// `config.output` in a single write, returning the text that was written.
pub fn generate(config: &TocConfig) -> Result<String, TocError> {
    let reader = fs::open_reader(&config.input)?;
    let toc = toc::build_toc(reader).map_err(|source| TocError::Read {
        path: config.input.clone(),
        source,
    })?;

    info!("Generated table of contents:\n{}", toc);

    fs::write_file(&config.output, &toc)?;
    Ok(toc)
}
