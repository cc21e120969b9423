//! Answer sheet - the user's ordered, possibly sparse selections.

use serde::{Deserialize, Serialize};

/// Ordered sequence of selected-option indices, one slot per question.
///
/// `None` means the question was skipped. Out-of-bank indices are kept as
/// recorded; consumers resolve them against the bank and drop misses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Option<usize>>);

impl AnswerSet {
    /// Creates an empty answer sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an answer sheet from raw selections.
    pub fn from_selections(selections: Vec<Option<usize>>) -> Self {
        Self(selections)
    }

    /// Returns the selected option index for a question, if any.
    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.0.get(question_index).copied().flatten()
    }

    /// Returns the number of question slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no slots exist at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns how many questions were actually answered.
    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }
}

impl FromIterator<Option<usize>> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = Option<usize>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_returns_recorded_choice() {
        let answers = AnswerSet::from_selections(vec![Some(2), None, Some(0)]);
        assert_eq!(answers.selected(0), Some(2));
        assert_eq!(answers.selected(1), None);
        assert_eq!(answers.selected(2), Some(0));
    }

    #[test]
    fn selected_out_of_bounds_is_none() {
        let answers = AnswerSet::from_selections(vec![Some(1)]);
        assert_eq!(answers.selected(10), None);
    }

    #[test]
    fn answered_count_skips_gaps() {
        let answers = AnswerSet::from_selections(vec![Some(0), None, None, Some(3)]);
        assert_eq!(answers.len(), 4);
        assert_eq!(answers.answered_count(), 2);
    }
}
