//! Response formatter.
//!
//! Turns the raw text returned by the text-generation service into a flat
//! sequence of [`DisplayBlock`]s, one per input line:
//! - fence marker lines (```` ``` ````) toggle code mode and render blank
//! - inside a fence every line is a verbatim code line
//! - `#`-prefixed lines are headings, `*`/`-`-prefixed lines are list items
//! - anything else non-blank is a paragraph
//!
//! Grouping consecutive list items into one visual list is left to the
//! presentation layer.

use serde::{Deserialize, Serialize};

/// Deepest heading level the dashboard distinguishes; `####` renders as `###`.
pub const MAX_HEADING_LEVEL: u8 = 3;

const FENCE: &str = "```";

/// One classified, renderable line of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading { level: u8, text: String },
    ListItem { text: String },
    CodeLine { text: String },
    Paragraph { text: String },
    Blank,
}

impl DisplayBlock {
    /// The display text, if the block carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            DisplayBlock::Heading { text, .. }
            | DisplayBlock::ListItem { text }
            | DisplayBlock::CodeLine { text }
            | DisplayBlock::Paragraph { text } => Some(text),
            DisplayBlock::Blank => None,
        }
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self {
            DisplayBlock::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DisplayBlock::Blank)
    }
}

/// Classify every line of `raw`.
///
/// Total over all inputs: the empty string gives an empty sequence, and an
/// unterminated fence leaves the rest of the input in code mode.
pub fn format(raw: &str) -> Vec<DisplayBlock> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut in_code_block = false;

    for line in raw.split('\n') {
        if line.starts_with(FENCE) {
            in_code_block = !in_code_block;
            blocks.push(DisplayBlock::Blank);
            continue;
        }

        if in_code_block {
            blocks.push(DisplayBlock::CodeLine {
                text: line.to_string(),
            });
            continue;
        }

        blocks.push(classify(line));
    }

    blocks
}

/// Classify a single line outside a code fence.
fn classify(line: &str) -> DisplayBlock {
    let trimmed = line.trim();

    if trimmed.starts_with('#') {
        let run = trimmed.chars().take_while(|c| *c == '#').count();
        let level = run.min(MAX_HEADING_LEVEL as usize) as u8;
        let text = trimmed.replace('#', "").trim().to_string();
        return DisplayBlock::Heading { level, text };
    }

    if let Some(rest) = trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('-'))
    {
        return DisplayBlock::ListItem {
            text: rest.trim_start().to_string(),
        };
    }

    if !trimmed.is_empty() {
        return DisplayBlock::Paragraph {
            text: line.to_string(),
        };
    }

    DisplayBlock::Blank
}

/// A formatted response, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub blocks: Vec<DisplayBlock>,
}

impl FormattedResponse {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            blocks: format(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Displayed text of every non-blank block, joined with newlines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(DisplayBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            DisplayBlock::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
