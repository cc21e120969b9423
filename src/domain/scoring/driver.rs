//! Driver enum representing the four emotional motivators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The four emotional drivers weighted by the quiz rubric.
///
/// Declaration order is the canonical precedence used for every
/// deterministic tie-break in scoring and sorting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Driver {
    #[serde(rename = "control")]
    Control,
    #[serde(rename = "avoidance")]
    Avoidance,
    #[serde(rename = "validation")]
    Validation,
    #[serde(rename = "fear-of-rejection")]
    FearOfRejection,
}

impl Driver {
    /// Returns all drivers in canonical precedence order.
    pub fn all() -> &'static [Driver] {
        &[
            Driver::Control,
            Driver::Avoidance,
            Driver::Validation,
            Driver::FearOfRejection,
        ]
    }

    /// Returns the 0-based precedence index of this driver.
    pub fn precedence(&self) -> usize {
        Self::all()
            .iter()
            .position(|d| d == self)
            .expect("Driver must be in all() array")
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Driver::Control => "Control",
            Driver::Avoidance => "Avoidance",
            Driver::Validation => "Validation",
            Driver::FearOfRejection => "Fear of Rejection",
        }
    }

    /// Returns the wire identifier used by the quiz rubric.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Driver::Control => "control",
            Driver::Avoidance => "avoidance",
            Driver::Validation => "validation",
            Driver::FearOfRejection => "fear-of-rejection",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Driver {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "control" => Ok(Driver::Control),
            "avoidance" => Ok(Driver::Avoidance),
            "validation" => Ok(Driver::Validation),
            "fear-of-rejection" => Ok(Driver::FearOfRejection),
            other => Err(ValidationError::invalid_format(
                "driver",
                format!("unknown driver '{}'", other),
            )),
        }
    }
}
