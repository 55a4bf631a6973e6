use log::debug;

use crate::toc::heading::{Heading, HeadingLevel};

/// Accumulates numbered table-of-contents entries, one input line at a time.
///
/// Only level-2 headings produce entries. Level-3 headings are still
/// classified and handed back to the caller, but nothing is appended for them.
#[derive(Debug)]
pub struct TocBuilder {
    toc: String,
    counter: usize,
}

impl TocBuilder {
    pub fn new() -> Self {
        Self {
            toc: String::new(),
            counter: 1,
        }
    }

    /// Classify `line` and append an entry if it is a level-2 heading
    pub fn push_line(&mut self, line: &str) -> Option<Heading> {
        let heading = Heading::parse(line)?;

        match heading.level {
            HeadingLevel::Two => {
                self.toc.push_str(&heading.to_list_item(self.counter));
                debug!("Entry {}: {} -> #{}", self.counter, heading.text, heading.slug);
                self.counter += 1;
            }
            HeadingLevel::Three => {
                debug!(
                    "Level {} heading not listed: {} -> #{}",
                    heading.level.depth(),
                    heading.text,
                    heading.slug
                );
            }
        }

        Some(heading)
    }

    /// Number of entries appended so far
    pub fn entry_count(&self) -> usize {
        self.counter - 1
    }

    /// Consume the builder and return the accumulated text
    pub fn finish(self) -> String {
        self.toc
    }
}

impl Default for TocBuilder {
    fn default() -> Self {
        Self::new()
    }
}
