//! Composition context shared by every section builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::pattern::{Archetype, PatternProfile};
use crate::domain::quiz::DomainSlices;
use crate::domain::scoring::DriverPercentages;

use super::PhraseLibrary;

/// Relationship status as the quiz intake records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "married")]
    Married,
    #[serde(rename = "in a relationship")]
    InRelationship,
    #[serde(rename = "divorced")]
    Divorced,
    #[serde(rename = "separated")]
    Separated,
}

impl RelationshipStatus {
    /// Returns all statuses.
    pub fn all() -> &'static [RelationshipStatus] {
        &[
            RelationshipStatus::Single,
            RelationshipStatus::Married,
            RelationshipStatus::InRelationship,
            RelationshipStatus::Divorced,
            RelationshipStatus::Separated,
        ]
    }
}

impl FromStr for RelationshipStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single" => Ok(RelationshipStatus::Single),
            "married" => Ok(RelationshipStatus::Married),
            "in a relationship" => Ok(RelationshipStatus::InRelationship),
            "divorced" => Ok(RelationshipStatus::Divorced),
            "separated" => Ok(RelationshipStatus::Separated),
            other => Err(ValidationError::invalid_format(
                "relationship_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelationshipStatus::Single => "single",
            RelationshipStatus::Married => "married",
            RelationshipStatus::InRelationship => "in a relationship",
            RelationshipStatus::Divorced => "divorced",
            RelationshipStatus::Separated => "separated",
        };
        write!(f, "{}", s)
    }
}

/// Optional personal details used to address the reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personalization {
    pub first_name: Option<String>,
    pub exact_age: Option<u8>,
    pub relationship_status: Option<RelationshipStatus>,
}

/// Everything a section builder may read.
///
/// Built once per render by the assembler; builders take it by shared
/// reference and write fallbacks into a separate diagnostics collector.
#[derive(Debug)]
pub struct NarrativeContext<'a> {
    pub profile: &'a PatternProfile,
    pub archetype: Archetype,
    pub percentages: &'a DriverPercentages,
    pub dominance: Percentage,
    pub dominance_label: Option<&'a str>,
    pub total_score: Option<u32>,
    pub slices: &'a DomainSlices,
    pub personalization: &'a Personalization,
    pub phrases: &'a PhraseLibrary,
    pub today: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_status_wire_forms_round_trip() {
        for status in RelationshipStatus::all() {
            let wire = format!("{}", status);
            assert_eq!(wire.parse::<RelationshipStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn in_a_relationship_uses_spaced_wire_form() {
        let json = serde_json::to_string(&RelationshipStatus::InRelationship).unwrap();
        assert_eq!(json, "\"in a relationship\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("engaged".parse::<RelationshipStatus>().is_err());
    }

    #[test]
    fn personalization_deserializes_from_camel_case() {
        let p: Personalization = serde_json::from_str(
            r#"{"firstName":"Amy","exactAge":34,"relationshipStatus":"single"}"#,
        )
        .unwrap();
        assert_eq!(p.first_name.as_deref(), Some("Amy"));
        assert_eq!(p.exact_age, Some(34));
        assert_eq!(p.relationship_status, Some(RelationshipStatus::Single));
    }
}
