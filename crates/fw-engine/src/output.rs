//! Response records handed to the presentation layer.

use std::fmt;

use crate::preferences::DisplayMode;

/// One entry for the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A line of plain narration.
    Text(String),
    /// A structured list, optionally introduced by a heading.
    Listing {
        /// Line shown before the items, if any.
        heading: Option<String>,
        /// The listed entries.
        items: Vec<String>,
    },
    /// Clear everything rendered so far.
    Clear,
}

impl Response {
    /// Plain narration.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A list with a heading.
    pub fn listing(heading: impl Into<String>, items: Vec<String>) -> Self {
        Self::Listing {
            heading: Some(heading.into()),
            items,
        }
    }

    /// A list without a heading.
    pub fn items(items: Vec<String>) -> Self {
        Self::Listing {
            heading: None,
            items,
        }
    }

    /// The text if this is a plain line.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Listing { heading, items } => {
                let mut lines = Vec::with_capacity(items.len() + 1);
                if let Some(heading) = heading {
                    lines.push(heading.clone());
                }
                lines.extend(items.iter().map(|item| format!("  - {item}")));
                f.write_str(&lines.join("\n"))
            }
            Self::Clear => Ok(()),
        }
    }
}

/// Render responses as plain text, one per line. `Clear` discards what came before it.
pub fn transcript(responses: &[Response]) -> String {
    let start = responses
        .iter()
        .rposition(|r| matches!(r, Response::Clear))
        .map_or(0, |pos| pos + 1);
    responses[start..]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary values shown beside the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    /// Current score.
    pub score: u32,
    /// Moves made.
    pub moves: u32,
    /// Health, truncated to a whole number.
    pub health: i64,
    /// Active period of the day.
    pub period: Option<String>,
    /// Formatted clock, e.g. "8:15".
    pub time: String,
    /// Current display mode.
    pub mode: DisplayMode,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} | Moves: {} | Health: {} | ",
            self.score, self.moves, self.health
        )?;
        match &self.period {
            Some(period) => write!(f, "{period} {}", self.time),
            None => f.write_str(&self.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_display() {
        let r = Response::listing("You are carrying:", vec!["a lamp.".into(), "an apple.".into()]);
        assert_eq!(r.to_string(), "You are carrying:\n  - a lamp.\n  - an apple.");
        let r = Response::items(vec!["Lamp: taken.".into()]);
        assert_eq!(r.to_string(), "  - Lamp: taken.");
        assert_eq!(r.as_text(), None);
        assert_eq!(Response::text("Hall").as_text(), Some("Hall"));
    }

    #[test]
    fn transcript_respects_clear() {
        let responses = vec![
            Response::text("old"),
            Response::Clear,
            Response::text("Screen cleared."),
        ];
        assert_eq!(transcript(&responses), "Screen cleared.");
    }

    #[test]
    fn status_line_format() {
        let status = StatusLine {
            score: 0,
            moves: 3,
            health: 5,
            period: Some("Morning".into()),
            time: "8:45".into(),
            mode: DisplayMode::Light,
        };
        assert_eq!(status.to_string(), "Score: 0 | Moves: 3 | Health: 5 | Morning 8:45");
    }
}
