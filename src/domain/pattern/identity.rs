//! PatternName enum - the eight behavioral pattern identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::scoring::Driver;

use super::Archetype;

/// The eight behavioral patterns, two per archetype.
///
/// This is the closed set the composer dispatches on; upstream strings are
/// parsed once at the boundary and unknown names never get past it. The
/// legacy alias "Withdrawer" is accepted for `GuardedOne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternName {
    Fixer,
    Perfectionist,
    Pleaser,
    Achiever,
    Escapist,
    Drifter,
    GuardedOne,
    Worrier,
}

impl PatternName {
    /// Returns all patterns in canonical order (grouped by archetype).
    pub fn all() -> &'static [PatternName] {
        &[
            PatternName::Fixer,
            PatternName::Perfectionist,
            PatternName::Pleaser,
            PatternName::Achiever,
            PatternName::Escapist,
            PatternName::Drifter,
            PatternName::GuardedOne,
            PatternName::Worrier,
        ]
    }

    /// Returns the archetype this pattern nests under.
    pub fn archetype(&self) -> Archetype {
        match self {
            PatternName::Fixer | PatternName::Perfectionist => Archetype::Anchor,
            PatternName::Pleaser | PatternName::Achiever => Archetype::Catalyst,
            PatternName::Escapist | PatternName::Drifter => Archetype::Wanderer,
            PatternName::GuardedOne | PatternName::Worrier => Archetype::Guardian,
        }
    }

    /// Returns the driver behind this pattern's archetype.
    pub fn driver(&self) -> Driver {
        self.archetype().driver()
    }

    /// Returns the short name as upstream payloads spell it.
    pub fn short_name(&self) -> &'static str {
        match self {
            PatternName::Fixer => "Fixer",
            PatternName::Perfectionist => "Perfectionist",
            PatternName::Pleaser => "Pleaser",
            PatternName::Achiever => "Achiever",
            PatternName::Escapist => "Escapist",
            PatternName::Drifter => "Drifter",
            PatternName::GuardedOne => "Guarded One",
            PatternName::Worrier => "Worrier",
        }
    }

    /// Returns the display name used in report prose.
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternName::Fixer => "The Fixer",
            PatternName::Perfectionist => "The Perfectionist",
            PatternName::Pleaser => "The Pleaser",
            PatternName::Achiever => "The Achiever",
            PatternName::Escapist => "The Escapist",
            PatternName::Drifter => "The Drifter",
            PatternName::GuardedOne => "The Guarded One",
            PatternName::Worrier => "The Worrier",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PatternName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Fixer" | "The Fixer" => Ok(PatternName::Fixer),
            "Perfectionist" | "The Perfectionist" => Ok(PatternName::Perfectionist),
            "Pleaser" | "The Pleaser" => Ok(PatternName::Pleaser),
            "Achiever" | "The Achiever" => Ok(PatternName::Achiever),
            "Escapist" | "The Escapist" => Ok(PatternName::Escapist),
            "Drifter" | "The Drifter" => Ok(PatternName::Drifter),
            "Guarded One" | "The Guarded One" | "Withdrawer" | "The Withdrawer" => {
                Ok(PatternName::GuardedOne)
            }
            "Worrier" | "The Worrier" => Ok(PatternName::Worrier),
            other => Err(ValidationError::invalid_format(
                "pattern",
                format!("unknown pattern '{}'", other),
            )),
        }
    }
}
