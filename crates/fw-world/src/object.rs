use std::fmt;

use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// Indefinite or definite article used when listing an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    /// "a"
    #[default]
    A,
    /// "an"
    An,
    /// "the"
    The,
}

impl Article {
    /// The article as written.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::An => "an",
            Self::The => "the",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an object currently is.
///
/// In world data this is a room identifier, or `null` for an object the
/// player is carrying.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<RoomId>", into = "Option<RoomId>")]
pub enum ObjectLocation {
    /// Lying in a room.
    Room(RoomId),
    /// In the player's inventory.
    Carried,
}

impl ObjectLocation {
    /// Whether the object is in the given room.
    pub fn is_in(&self, room: &RoomId) -> bool {
        matches!(self, Self::Room(id) if id == room)
    }
}

impl From<Option<RoomId>> for ObjectLocation {
    fn from(value: Option<RoomId>) -> Self {
        value.map_or(Self::Carried, Self::Room)
    }
}

impl From<ObjectLocation> for Option<RoomId> {
    fn from(value: ObjectLocation) -> Self {
        match value {
            ObjectLocation::Room(id) => Some(id),
            ObjectLocation::Carried => None,
        }
    }
}

/// A thing in the world the player can see and possibly carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameObject {
    /// Full name, e.g. "brass lantern".
    pub name: String,
    /// Lowercase aliases the player may use instead of the full name.
    #[serde(default)]
    pub short_names: Vec<String>,
    /// Article used in listings.
    #[serde(default)]
    pub article: Article,
    /// Current location.
    pub location: ObjectLocation,
    /// Whether the player can pick it up.
    #[serde(default)]
    pub carryable: bool,
    /// Inventory capacity the object occupies.
    #[serde(default, alias = "weight")]
    pub inventory_space: u32,
    /// Set once the object has left its initial room.
    #[serde(default)]
    pub moved: bool,
    /// The room prose already mentions the object, so it is never listed separately.
    #[serde(default)]
    pub description_embedded: bool,
    /// Line shown while the object still sits untouched in its initial room.
    #[serde(default)]
    pub description_initial: String,
}

impl GameObject {
    /// Create a carryable object in a room.
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description_initial: format!("There is a {name} here."),
            name,
            short_names: Vec::new(),
            article: Article::A,
            location: ObjectLocation::Room(RoomId::new(room)),
            carryable: true,
            inventory_space: 1,
            moved: false,
            description_embedded: false,
        }
    }

    /// Set the inventory weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.inventory_space = weight;
        self
    }

    /// Add a short-name alias.
    pub fn with_short_name(mut self, alias: impl Into<String>) -> Self {
        self.short_names.push(alias.into());
        self
    }

    /// Set the article.
    pub fn with_article(mut self, article: Article) -> Self {
        self.article = article;
        self
    }

    /// Set the initial description line.
    pub fn with_initial_description(mut self, text: impl Into<String>) -> Self {
        self.description_initial = text.into();
        self
    }

    /// Mark the object as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.carryable = false;
        self
    }

    /// Mark the object as mentioned by its room's prose.
    pub fn embedded(mut self) -> Self {
        self.description_embedded = true;
        self
    }

    /// Whether `input` names this object, by full name or alias (case-insensitive).
    pub fn answers_to(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.name.to_lowercase() == input
            || self
                .short_names
                .iter()
                .any(|alias| alias.to_lowercase() == input)
    }

    /// "a brass lantern"
    pub fn with_article_name(&self) -> String {
        format!("{} {}", self.article, self.name)
    }
}
