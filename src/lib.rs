//! Generate a numbered Markdown table of contents from a document's `##` headings.

pub mod cli;
pub mod config;
pub mod toc;
pub mod utils;

pub use toc::{build_toc, generate_toc, Heading, HeadingLevel, TocBuilder};
