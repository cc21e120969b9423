//! Report assembly - the fixed render pipeline.
//!
//! Pipeline order: resolve identity, aggregate percentages, extract
//! domain slices, build every section, concatenate, write to the sink,
//! apply post-insert placeholder updates. Identity is the one hard
//! failure: if it cannot be resolved the error fragment is written and
//! nothing else composes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Diagnostics, Percentage, ReportId};
use crate::domain::narrative::{
    compose_all, format_reset_date, next_reset_date, ComposedReport, NarrativeContext,
    Personalization, PhraseLibrary, RelationshipStatus, NEXT_RESET_DATE_PLACEHOLDER,
};
use crate::domain::pattern::{
    resolve, RawArchetype, RawIdentity, RawPattern, Resolution, ERROR_LOADING_RESULTS,
};
use crate::domain::quiz::{AnswerSet, DomainRangeTable, DomainSlices, QuestionBank};
use crate::domain::scoring::{Driver, DriverPercentages, DriverScores};
use crate::ports::ReportSink;

/// The upstream payload for one render, as the quiz front end sends it.
///
/// Everything beyond the pattern and archetype identity is optional; the
/// composer degrades per field. `sorted_drivers` is accepted so full
/// payloads deserialize, but ordering is always recomputed from the
/// percentages to keep composition deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderInput {
    pub pattern: RawPattern,
    pub archetype: RawArchetype,
    pub pattern_dominance: Option<u8>,
    pub dominance_label: Option<String>,
    pub driver_percentages: Option<BTreeMap<Driver, u8>>,
    pub total_score: Option<u32>,
    pub exact_age: Option<u8>,
    pub relationship_status: Option<String>,
    pub first_name: Option<String>,
    pub sorted_drivers: Option<Vec<(Driver, u8)>>,
    pub answers: Option<Vec<Option<usize>>>,
    pub driver_scores: Option<DriverScores>,
}

/// What one render produced: the report plus the fallback record.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub report: ComposedReport,
    pub diagnostics: Diagnostics,
}

/// Orchestrates one complete composition per `render` call.
///
/// Holds only read-only collaborators; every render is an independent
/// invocation, so a single assembler is safe to reuse across requests.
pub struct ReportAssembler<'a> {
    phrases: &'a PhraseLibrary,
    bank: &'a QuestionBank,
    ranges: &'a DomainRangeTable,
}

impl<'a> ReportAssembler<'a> {
    /// Creates an assembler over the given read-only collaborators.
    pub fn new(
        phrases: &'a PhraseLibrary,
        bank: &'a QuestionBank,
        ranges: &'a DomainRangeTable,
    ) -> Self {
        Self {
            phrases,
            bank,
            ranges,
        }
    }

    /// Runs the full pipeline and writes the document to the sink.
    ///
    /// `today` parameterizes the next-reset-date so composition stays a
    /// pure function of its arguments.
    pub fn render(
        &self,
        input: &RenderInput,
        today: NaiveDate,
        sink: &mut dyn ReportSink,
    ) -> RenderOutcome {
        let id = ReportId::new();
        let span = tracing::info_span!("render_report", report_id = %id);
        let _guard = span.enter();

        let mut diagnostics = Diagnostics::new();

        let identity = RawIdentity {
            pattern: input.pattern.clone(),
            archetype: input.archetype.clone(),
        };
        let (profile, archetype) = match resolve(&identity, &mut diagnostics) {
            Resolution::Resolved { profile, archetype } => (profile, archetype),
            Resolution::Failed => {
                let report = ComposedReport::error(id, ERROR_LOADING_RESULTS);
                sink.insert_document(id, &report.document());
                return RenderOutcome {
                    report,
                    diagnostics,
                };
            }
        };

        let percentages = aggregate(input, &mut diagnostics);
        let dominance = match input.pattern_dominance {
            Some(value) => Percentage::new(value),
            None => {
                diagnostics.record("assembler", "pattern_dominance");
                percentages.get(percentages.dominant())
            }
        };

        let answers = match &input.answers {
            Some(selections) => AnswerSet::from_selections(selections.clone()),
            None => {
                diagnostics.record("assembler", "answers");
                AnswerSet::new()
            }
        };
        let slices = DomainSlices::extract(&answers, self.ranges, self.bank);

        let personalization = Personalization {
            first_name: input.first_name.clone(),
            exact_age: input.exact_age,
            relationship_status: parse_status(input, &mut diagnostics),
        };

        let ctx = NarrativeContext {
            profile: &profile,
            archetype,
            percentages: &percentages,
            dominance,
            dominance_label: input.dominance_label.as_deref(),
            total_score: input.total_score,
            slices: &slices,
            personalization: &personalization,
            phrases: self.phrases,
            today,
        };

        let sections = compose_all(&ctx, &mut diagnostics);
        let report = ComposedReport::new(id, sections);

        sink.insert_document(id, &report.document());
        sink.set_placeholder(
            NEXT_RESET_DATE_PLACEHOLDER,
            &format_reset_date(next_reset_date(today)),
        );

        tracing::debug!(
            sections = report.sections.len(),
            defaulted = diagnostics.defaulted().len(),
            "report composed"
        );

        RenderOutcome {
            report,
            diagnostics,
        }
    }
}

/// Normalizes whichever score representation the payload carries.
///
/// Raw scores win over pre-computed percentages so the aggregator's
/// rounding rules apply; with neither present the degenerate even split
/// renders.
fn aggregate(input: &RenderInput, diagnostics: &mut Diagnostics) -> DriverPercentages {
    if let Some(scores) = &input.driver_scores {
        return DriverPercentages::from_scores(scores);
    }
    if let Some(values) = &input.driver_percentages {
        return DriverPercentages::from_raw_percentages(values);
    }
    diagnostics.record("assembler", "driver_percentages");
    DriverPercentages::from_scores(&DriverScores::new())
}

fn parse_status(
    input: &RenderInput,
    diagnostics: &mut Diagnostics,
) -> Option<RelationshipStatus> {
    match input.relationship_status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<RelationshipStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                diagnostics.record("assembler", "relationship_status");
                None
            }
        },
    }
}
