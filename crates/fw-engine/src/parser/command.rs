//! The closed command set and its verb registry.

use fw_world::Direction;

/// A player command, resolved from a canonical verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit.
    Move {
        /// The direction to walk.
        direction: Direction,
    },
    /// Pick up an object or everything.
    Get,
    /// Put down an object or everything.
    Drop,
    /// List carried objects.
    Inventory,
    /// Describe the room in full.
    Look,
    /// Report the clock and period.
    Time,
    /// Let a move pass.
    Wait,
    /// Sleep until morning.
    Sleep,
    /// Report health.
    Diagnose,
    /// Report score and moves.
    Score,
    /// Full descriptions on first visit only.
    Brief,
    /// Full descriptions every time.
    Verbose,
    /// Toggle the display mode.
    Mode,
    /// Clear the output.
    Clear,
    /// Start over.
    Restart,
    /// List commands.
    Help,
    /// End the session.
    Quit,
}

const fn go(direction: Direction) -> Command {
    Command::Move { direction }
}

/// Canonical verb tokens and the command each selects.
pub const REGISTRY: &[(&str, Command)] = &[
    ("n", go(Direction::North)),
    ("s", go(Direction::South)),
    ("e", go(Direction::East)),
    ("w", go(Direction::West)),
    ("ne", go(Direction::Northeast)),
    ("nw", go(Direction::Northwest)),
    ("se", go(Direction::Southeast)),
    ("sw", go(Direction::Southwest)),
    ("u", go(Direction::Up)),
    ("d", go(Direction::Down)),
    ("get", Command::Get),
    ("drop", Command::Drop),
    ("i", Command::Inventory),
    ("look", Command::Look),
    ("time", Command::Time),
    ("wait", Command::Wait),
    ("sleep", Command::Sleep),
    ("diagnose", Command::Diagnose),
    ("score", Command::Score),
    ("brief", Command::Brief),
    ("verbose", Command::Verbose),
    ("mode", Command::Mode),
    ("clear", Command::Clear),
    ("restart", Command::Restart),
    ("help", Command::Help),
    ("quit", Command::Quit),
];

impl Command {
    /// Look up a canonical verb.
    pub fn from_verb(verb: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(token, _)| *token == verb)
            .map(|(_, command)| *command)
    }

    /// The canonical verb that selects this command.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Move { direction } => direction.token(),
            Self::Get => "get",
            Self::Drop => "drop",
            Self::Inventory => "i",
            Self::Look => "look",
            Self::Time => "time",
            Self::Wait => "wait",
            Self::Sleep => "sleep",
            Self::Diagnose => "diagnose",
            Self::Score => "score",
            Self::Brief => "brief",
            Self::Verbose => "verbose",
            Self::Mode => "mode",
            Self::Clear => "clear",
            Self::Restart => "restart",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// All canonical verbs in registry order.
    pub fn verbs() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(token, _)| *token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_input;

    #[test]
    fn registry_round_trips_verbs() {
        for (token, command) in REGISTRY {
            assert_eq!(command.verb(), *token);
            assert_eq!(Command::from_verb(token), Some(*command));
        }
    }

    #[test]
    fn every_direction_is_registered() {
        for direction in Direction::ALL {
            assert_eq!(
                Command::from_verb(direction.token()),
                Some(Command::Move { direction })
            );
        }
    }

    #[test]
    fn unknown_verb() {
        assert_eq!(Command::from_verb("xyzzy"), None);
        assert_eq!(Command::from_verb(""), None);
    }

    #[test]
    fn every_synonym_reaches_a_command() {
        for (surface, _) in crate::parser::SYNONYMS {
            let parsed = parse_input(surface).unwrap();
            assert!(
                Command::from_verb(&parsed.verb).is_some(),
                "{surface} resolved to unregistered verb {}",
                parsed.verb
            );
        }
    }

    #[test]
    fn verbs_are_unique() {
        let mut verbs: Vec<_> = Command::verbs().collect();
        let total = verbs.len();
        verbs.sort_unstable();
        verbs.dedup();
        assert_eq!(verbs.len(), total);
    }
}
