mod builder;
mod heading;
mod slug;

pub use builder::TocBuilder;
pub use heading::{Heading, HeadingLevel};
pub use slug::anchor_slug;

use log::debug;
use std::io::{self, BufRead};

/// Scan a line-oriented reader and return the generated table of contents.
///
/// The reader is consumed once, line by line; the text is only produced
/// after the input is exhausted. Invalid UTF-8 is decoded lossily (U+FFFD),
/// so only genuine I/O errors fail the scan.
pub fn build_toc<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut builder = TocBuilder::new();
    let mut line_count = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        builder.push_line(line.trim_end_matches(&['\n', '\r'][..]));
        line_count += 1;
    }

    debug!("Scanned {} lines, {} entries", line_count, builder.entry_count());
    Ok(builder.finish())
}

/// Generate a table of contents from Markdown already held in memory
pub fn generate_toc(markdown: &str) -> String {
    let mut builder = TocBuilder::new();
    for line in markdown.lines() {
        builder.push_line(line);
    }
    builder.finish()
}
