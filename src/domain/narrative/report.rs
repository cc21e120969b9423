//! Composed report types consumed by the view layer.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ReportId;

/// The fixed set of report sections, in composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    DriverBreakdown,
    DriverInteraction,
    PatternDeepDive,
    LifeAreaImpacts,
    OriginStory,
    CostAndUrgency,
    Workbook,
    Error,
}

impl SectionKind {
    /// Returns the display heading for this section.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Your Results",
            SectionKind::DriverBreakdown => "Your Drivers",
            SectionKind::DriverInteraction => "How Your Drivers Interact",
            SectionKind::PatternDeepDive => "Inside Your Pattern",
            SectionKind::LifeAreaImpacts => "Where It Shows Up",
            SectionKind::OriginStory => "Where It Began",
            SectionKind::CostAndUrgency => "What It Costs You",
            SectionKind::Workbook => "Your Workbook",
            SectionKind::Error => "Error",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading())
    }
}

/// One composed section fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

impl Section {
    /// Creates a section.
    pub fn new(kind: SectionKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// The ordered, fully-composed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedReport {
    pub id: ReportId,
    pub sections: Vec<Section>,
}

impl ComposedReport {
    /// Creates a report from ordered sections.
    pub fn new(id: ReportId, sections: Vec<Section>) -> Self {
        Self { id, sections }
    }

    /// Creates the minimal error report.
    pub fn error(id: ReportId, fragment: impl Into<String>) -> Self {
        Self {
            id,
            sections: vec![Section::new(SectionKind::Error, fragment.into())],
        }
    }

    /// Returns true when this is the minimal error report.
    pub fn is_error(&self) -> bool {
        matches!(
            self.sections.as_slice(),
            [Section { kind: SectionKind::Error, .. }]
        )
    }

    /// Returns the text of a section, if composed.
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.text.as_str())
    }

    /// Serializes the whole document as a single string for insertion.
    pub fn document(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
