//! Identity resolution - the one hard-failure path in the system.
//!
//! Pattern and archetype names arrive as strings from upstream. Parsing
//! them into the closed enums happens exactly once, here. A missing or
//! unrecognized identity cannot be composed around, so it resolves to the
//! error placeholder; every other gap in the payload is backfilled.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Diagnostics;

use super::{Archetype, PatternName, PatternProfile, RawPattern};

/// Minimal visible output when identity cannot be resolved.
pub const ERROR_LOADING_RESULTS: &str =
    "Error Loading Results. Please retake the quiz or contact support with your result link.";

/// Partial archetype payload as upstream sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawArchetype {
    pub name: Option<String>,
}

/// The identity portion of the upstream payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIdentity {
    pub pattern: RawPattern,
    pub archetype: RawArchetype,
}

/// Outcome of identity resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved {
        profile: PatternProfile,
        archetype: Archetype,
    },
    Failed,
}

impl Resolution {
    /// Returns true when identity resolution failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Resolution::Failed)
    }
}

/// Resolves pattern and archetype identity from the upstream payload.
///
/// Fails only when the pattern name or archetype name is missing or not
/// one of the known values. A provided archetype that disagrees with the
/// pattern's own archetype is kept as sent and recorded as a diagnostic.
pub fn resolve(raw: &RawIdentity, diagnostics: &mut Diagnostics) -> Resolution {
    let pattern_name = match raw.pattern.name.as_deref().map(str::parse::<PatternName>) {
        Some(Ok(name)) => name,
        Some(Err(_)) | None => {
            tracing::warn!(name = ?raw.pattern.name, "unresolvable pattern identity");
            return Resolution::Failed;
        }
    };

    let archetype = match raw.archetype.name.as_deref().map(str::parse::<Archetype>) {
        Some(Ok(archetype)) => archetype,
        Some(Err(_)) | None => {
            tracing::warn!(name = ?raw.archetype.name, "unresolvable archetype identity");
            return Resolution::Failed;
        }
    };

    if archetype != pattern_name.archetype() {
        diagnostics.record("identity", "archetype_pattern_mismatch");
    }

    let profile = PatternProfile::from_raw(pattern_name, &raw.pattern, diagnostics);

    Resolution::Resolved { profile, archetype }
}
