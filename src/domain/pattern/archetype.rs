//! Archetype enum - the four top-level classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::Driver;

/// The four archetypes, each tied 1:1 to a dominant driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Anchor,
    Catalyst,
    Wanderer,
    Guardian,
}

impl Archetype {
    /// Returns all archetypes in canonical order.
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::Anchor,
            Archetype::Catalyst,
            Archetype::Wanderer,
            Archetype::Guardian,
        ]
    }

    /// Maps a dominant driver to its archetype.
    pub fn from_driver(driver: Driver) -> Self {
        match driver {
            Driver::Control => Archetype::Anchor,
            Driver::Validation => Archetype::Catalyst,
            Driver::Avoidance => Archetype::Wanderer,
            Driver::FearOfRejection => Archetype::Guardian,
        }
    }

    /// Returns the driver this archetype is tied to.
    pub fn driver(&self) -> Driver {
        match self {
            Archetype::Anchor => Driver::Control,
            Archetype::Catalyst => Driver::Validation,
            Archetype::Wanderer => Driver::Avoidance,
            Archetype::Guardian => Driver::FearOfRejection,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Anchor => "The Anchor",
            Archetype::Catalyst => "The Catalyst",
            Archetype::Wanderer => "The Wanderer",
            Archetype::Guardian => "The Guardian",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Archetype {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Anchor" | "The Anchor" => Ok(Archetype::Anchor),
            "Catalyst" | "The Catalyst" => Ok(Archetype::Catalyst),
            "Wanderer" | "The Wanderer" => Ok(Archetype::Wanderer),
            "Guardian" | "The Guardian" => Ok(Archetype::Guardian),
            other => Err(ValidationError::invalid_format(
                "archetype",
                format!("unknown archetype '{}'", other),
            )),
        }
    }
}
