use crate::toc::slug::anchor_slug;

/// Depth of a heading that takes part in the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `## Heading`
    Two,
    /// `### Heading`
    Three,
}

impl HeadingLevel {
    /// Number of markers the level corresponds to
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }
}

/// A heading line classified for the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    /// The trimmed source line
    pub raw: String,
    /// Text shown in the list entry, markers and backticks removed
    pub text: String,
    pub slug: String,
}

impl Heading {
    /// Classify a single line.
    ///
    /// Returns `None` for anything that is not a level-2 or level-3 heading:
    /// plain text, `# Title` headings and headings with four or more markers.
    /// A single marker with no space (`#Title`) is treated as level 2, and a
    /// line that still starts with `###` once the `##` prefix is removed
    /// (`## ### x`) is level 3.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = trim_line(line);
        if is_excluded(trimmed) {
            return None;
        }

        let clean = trimmed.replace('`', "");
        let clean = if clean.starts_with("###") {
            clean
        } else {
            clean.replacen("##", "", 1).trim().to_string()
        };

        let slug = anchor_slug(&clean);
        let (level, text) = if clean.starts_with("###") {
            (HeadingLevel::Three, clean.replace('#', "").trim().to_string())
        } else {
            (HeadingLevel::Two, clean)
        };

        Some(Self {
            level,
            raw: trimmed.to_string(),
            text,
            slug,
        })
    }

    /// Render as a numbered Markdown list entry, newline included
    pub fn to_list_item(&self, number: usize) -> String {
        format!("{}. [{}](#{})\n", number, self.text, self.slug)
    }
}

/// Whitespace trim that also drops a byte order mark
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// `####` also covers five or more markers.
fn is_excluded(trimmed: &str) -> bool {
    !trimmed.starts_with('#') || trimmed.starts_with("# ") || trimmed.starts_with("####")
}
