use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "buildtoc")]
#[command(about = "Generate a numbered table of contents from a Markdown document's headings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown document to scan for `##` headings
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write the table of contents to (overwritten)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
