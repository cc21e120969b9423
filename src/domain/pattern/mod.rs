//! Pattern module - Archetype and pattern identity, profiles, resolution.

mod archetype;
mod identity;
mod profile;
mod resolver;

pub use archetype::Archetype;
pub use identity::PatternName;
pub use profile::{Complex, PatternProfile, RawComplex, RawPattern};
pub use resolver::{resolve, RawArchetype, RawIdentity, Resolution, ERROR_LOADING_RESULTS};
