//! Life domains and the per-domain answer slicing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::scoring::Driver;

use super::{AnswerSet, QuestionBank};

/// The eight named life areas a report speaks to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LifeDomain {
    Love,
    Career,
    Money,
    Health,
    Friendship,
    Family,
    SelfWorth,
    Purpose,
}

impl LifeDomain {
    /// Returns all domains in canonical report order.
    pub fn all() -> &'static [LifeDomain] {
        &[
            LifeDomain::Love,
            LifeDomain::Career,
            LifeDomain::Money,
            LifeDomain::Health,
            LifeDomain::Friendship,
            LifeDomain::Family,
            LifeDomain::SelfWorth,
            LifeDomain::Purpose,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LifeDomain::Love => "Love & Relationships",
            LifeDomain::Career => "Career & Work",
            LifeDomain::Money => "Money & Finances",
            LifeDomain::Health => "Health & Body",
            LifeDomain::Friendship => "Friendship & Community",
            LifeDomain::Family => "Family",
            LifeDomain::SelfWorth => "Self-Worth & Identity",
            LifeDomain::Purpose => "Purpose & Growth",
        }
    }
}

impl fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inclusive question-index range for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRange {
    pub start: usize,
    pub end: usize,
}

impl DomainRange {
    /// Creates a range; `end` is inclusive.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Mapping from life domains to question-index ranges.
///
/// Config-provided and possibly partial; domains without a range simply
/// produce empty slices. `fallback()` is the built-in table used when no
/// config is supplied at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainRangeTable(BTreeMap<LifeDomain, DomainRange>);

impl DomainRangeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range for a domain.
    pub fn with_range(mut self, domain: LifeDomain, range: DomainRange) -> Self {
        self.0.insert(domain, range);
        self
    }

    /// Returns the range for a domain, if configured.
    pub fn range(&self, domain: LifeDomain) -> Option<DomainRange> {
        self.0.get(&domain).copied()
    }

    /// The built-in table: five questions per domain, in canonical order.
    pub fn fallback() -> Self {
        let mut table = BTreeMap::new();
        for (i, domain) in LifeDomain::all().iter().enumerate() {
            table.insert(*domain, DomainRange::new(i * 5, i * 5 + 4));
        }
        Self(table)
    }

    /// Parses a table from YAML, e.g. `love: { start: 0, end: 4 }`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// One answered question quoted back in a report callout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerCallout {
    pub question_index: usize,
    pub option_index: usize,
    pub question_text: String,
    pub option_text: String,
    pub driver: Driver,
}

/// Per-domain filtered answer subsequences with resolved text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSlices {
    slices: BTreeMap<LifeDomain, Vec<AnswerCallout>>,
}

impl DomainSlices {
    /// Extracts per-domain answer slices.
    ///
    /// Ranges that run past the answer sheet truncate silently, skipped
    /// questions and unresolvable option records are dropped. This never
    /// fails; worst case every slice is empty.
    pub fn extract(
        answers: &AnswerSet,
        ranges: &DomainRangeTable,
        bank: &QuestionBank,
    ) -> Self {
        let mut slices: BTreeMap<LifeDomain, Vec<AnswerCallout>> = BTreeMap::new();

        for domain in LifeDomain::all() {
            let callouts = match ranges.range(*domain) {
                Some(range) => collect_callouts(answers, bank, range),
                None => Vec::new(),
            };
            slices.insert(*domain, callouts);
        }

        Self { slices }
    }

    /// Returns the callouts for a domain (empty when none resolved).
    pub fn callouts(&self, domain: LifeDomain) -> &[AnswerCallout] {
        self.slices
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Counts a domain's answers per driver.
    pub fn driver_counts(&self, domain: LifeDomain) -> BTreeMap<Driver, usize> {
        let mut counts = BTreeMap::new();
        for callout in self.callouts(domain) {
            *counts.entry(callout.driver).or_insert(0) += 1;
        }
        counts
    }
}

fn collect_callouts(
    answers: &AnswerSet,
    bank: &QuestionBank,
    range: DomainRange,
) -> Vec<AnswerCallout> {
    let end = range.end.min(answers.len().saturating_sub(1));
    if answers.is_empty() || range.start > end {
        return Vec::new();
    }

    (range.start..=end)
        .filter_map(|question_index| {
            let option_index = answers.selected(question_index)?;
            let question = bank.question(question_index)?;
            let option = bank.option(question_index, option_index)?;
            Some(AnswerCallout {
                question_index,
                option_index,
                question_text: question.text.clone(),
                option_text: option.text.clone(),
                driver: option.driver,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{AnswerOption, Question};

    fn bank(questions: usize) -> QuestionBank {
        QuestionBank::new(
            (0..questions)
                .map(|i| Question {
                    text: format!("Question {}", i),
                    options: vec![
                        AnswerOption {
                            text: format!("Take charge of {}", i),
                            driver: Driver::Control,
                        },
                        AnswerOption {
                            text: format!("Step back from {}", i),
                            driver: Driver::Avoidance,
                        },
                    ],
                })
                .collect(),
        )
    }

    #[test]
    fn fallback_table_covers_all_domains_contiguously() {
        let table = DomainRangeTable::fallback();
        for (i, domain) in LifeDomain::all().iter().enumerate() {
            let range = table.range(*domain).unwrap();
            assert_eq!(range.start, i * 5);
            assert_eq!(range.end, i * 5 + 4);
        }
    }

    #[test]
    fn extract_filters_answers_into_domains() {
        let answers: AnswerSet = (0..40).map(|i| if i % 2 == 0 { Some(0) } else { None }).collect();
        let slices = DomainSlices::extract(&answers, &DomainRangeTable::fallback(), &bank(40));
        // Questions 0..=4 for Love, even indices answered: 0, 2, 4.
        assert_eq!(slices.callouts(LifeDomain::Love).len(), 3);
        let first = &slices.callouts(LifeDomain::Love)[0];
        assert_eq!(first.question_index, 0);
        assert_eq!(first.question_text, "Question 0");
        assert_eq!(first.driver, Driver::Control);
    }

    #[test]
    fn ranges_past_the_answer_sheet_truncate_silently() {
        let answers = AnswerSet::from_selections(vec![Some(0), Some(1)]);
        let table = DomainRangeTable::new().with_range(LifeDomain::Career, DomainRange::new(0, 99));
        let slices = DomainSlices::extract(&answers, &table, &bank(2));
        assert_eq!(slices.callouts(LifeDomain::Career).len(), 2);
    }

    #[test]
    fn missing_option_records_are_skipped() {
        // Option index 7 does not exist in the bank.
        let answers = AnswerSet::from_selections(vec![Some(7), Some(1)]);
        let table = DomainRangeTable::new().with_range(LifeDomain::Money, DomainRange::new(0, 1));
        let slices = DomainSlices::extract(&answers, &table, &bank(2));
        assert_eq!(slices.callouts(LifeDomain::Money).len(), 1);
        assert_eq!(slices.callouts(LifeDomain::Money)[0].driver, Driver::Avoidance);
    }

    #[test]
    fn empty_answers_yield_empty_slices_everywhere() {
        let slices =
            DomainSlices::extract(&AnswerSet::new(), &DomainRangeTable::fallback(), &bank(40));
        for domain in LifeDomain::all() {
            assert!(slices.callouts(*domain).is_empty());
        }
    }

    #[test]
    fn unconfigured_domains_have_empty_slices() {
        let answers = AnswerSet::from_selections(vec![Some(0)]);
        let table = DomainRangeTable::new().with_range(LifeDomain::Love, DomainRange::new(0, 0));
        let slices = DomainSlices::extract(&answers, &table, &bank(1));
        assert_eq!(slices.callouts(LifeDomain::Love).len(), 1);
        assert!(slices.callouts(LifeDomain::Career).is_empty());
    }

    #[test]
    fn driver_counts_tally_per_domain() {
        let answers = AnswerSet::from_selections(vec![Some(0), Some(0), Some(1)]);
        let table = DomainRangeTable::new().with_range(LifeDomain::Family, DomainRange::new(0, 2));
        let slices = DomainSlices::extract(&answers, &table, &bank(3));
        let counts = slices.driver_counts(LifeDomain::Family);
        assert_eq!(counts.get(&Driver::Control), Some(&2));
        assert_eq!(counts.get(&Driver::Avoidance), Some(&1));
    }

    #[test]
    fn table_parses_from_yaml() {
        let yaml = "love:\n  start: 0\n  end: 4\ncareer:\n  start: 5\n  end: 9\n";
        let table = DomainRangeTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.range(LifeDomain::Love), Some(DomainRange::new(0, 4)));
        assert_eq!(table.range(LifeDomain::Career), Some(DomainRange::new(5, 9)));
        assert_eq!(table.range(LifeDomain::Money), None);
    }
}
