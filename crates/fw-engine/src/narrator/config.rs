//! Narration settings.

use std::fmt;

/// How much of a room is described on repeat visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Full descriptions on first visit only.
    #[default]
    Brief,
    /// Full descriptions every time.
    Verbose,
}

impl Verbosity {
    /// Capitalized name, as used in "Brief descriptions on."
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brief => "Brief",
            Self::Verbose => "Verbose",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_brief() {
        assert_eq!(Verbosity::default(), Verbosity::Brief);
    }

    #[test]
    fn labels() {
        assert_eq!(Verbosity::Brief.to_string(), "Brief");
        assert_eq!(Verbosity::Verbose.label(), "Verbose");
    }
}
