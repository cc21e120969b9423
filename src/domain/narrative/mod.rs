//! Narrative module - the report composition engine.
//!
//! Each section of the results report is produced by a pure builder that
//! reads the shared [`NarrativeContext`], looks content up in the
//! [`PhraseLibrary`], substitutes computed values, and degrades to a
//! default on any miss. No builder panics or returns an error; a report
//! always renders.

mod context;
mod cost;
mod deep_dive;
mod drivers;
mod hero;
mod life_areas;
mod origin;
mod phrases;
mod report;
mod workbook;

pub use context::{NarrativeContext, Personalization, RelationshipStatus};
pub use cost::{format_reset_date, next_reset_date, NEXT_RESET_DATE_PLACEHOLDER};
pub use phrases::{LifeAreaEntry, PhraseLibrary, PhraseOverrides, WorkbookPhrases};
pub use report::{ComposedReport, Section, SectionKind};

use crate::domain::foundation::Diagnostics;

/// Builds every report section in the fixed canonical order.
pub fn compose_all(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> Vec<Section> {
    vec![
        Section::new(SectionKind::Hero, hero::build(ctx, diagnostics)),
        Section::new(SectionKind::DriverBreakdown, drivers::breakdown(ctx, diagnostics)),
        Section::new(
            SectionKind::DriverInteraction,
            drivers::interaction(ctx, diagnostics),
        ),
        Section::new(SectionKind::PatternDeepDive, deep_dive::build(ctx, diagnostics)),
        Section::new(SectionKind::LifeAreaImpacts, life_areas::build(ctx, diagnostics)),
        Section::new(SectionKind::OriginStory, origin::build(ctx, diagnostics)),
        Section::new(SectionKind::CostAndUrgency, cost::build(ctx, diagnostics)),
        Section::new(SectionKind::Workbook, workbook::build(ctx, diagnostics)),
    ]
}
