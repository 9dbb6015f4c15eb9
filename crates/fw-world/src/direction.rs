use std::fmt;

use serde::{Deserialize, Serialize};

/// A compass or vertical direction an exit can lead in.
///
/// Serialized with the short verb token (`"n"`, `"u"`, `"ne"`, ...), which is
/// also the key format used for room exit tables in world data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    #[serde(rename = "n", alias = "north")]
    North,
    /// South.
    #[serde(rename = "s", alias = "south")]
    South,
    /// East.
    #[serde(rename = "e", alias = "east")]
    East,
    /// West.
    #[serde(rename = "w", alias = "west")]
    West,
    /// Northeast.
    #[serde(rename = "ne", alias = "northeast")]
    Northeast,
    /// Northwest.
    #[serde(rename = "nw", alias = "northwest")]
    Northwest,
    /// Southeast.
    #[serde(rename = "se", alias = "southeast")]
    Southeast,
    /// Southwest.
    #[serde(rename = "sw", alias = "southwest")]
    Southwest,
    /// Up.
    #[serde(rename = "u", alias = "up")]
    Up,
    /// Down.
    #[serde(rename = "d", alias = "down")]
    Down,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 10] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from its short token or full name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// The short token used as a verb and as an exit key.
    pub fn token(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::Northeast => "ne",
            Self::Northwest => "nw",
            Self::Southeast => "se",
            Self::Southwest => "sw",
            Self::Up => "u",
            Self::Down => "d",
        }
    }

    /// The full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Whether this is `Up` or `Down`.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_and_long_forms() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("North"), Some(Direction::North));
        assert_eq!(Direction::parse("sw"), Some(Direction::Southwest));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn token_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.token()), Some(dir));
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }

    #[test]
    fn serde_uses_short_tokens_and_accepts_names() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"u\"");
        let dir: Direction = serde_json::from_str("\"east\"").unwrap();
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn vertical_directions() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::North.is_vertical());
    }
}
