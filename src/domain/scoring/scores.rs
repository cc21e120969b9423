//! Raw driver scores and their normalization into percentages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Percentage;

use super::Driver;

/// Raw per-driver scores as computed by the quiz rubric.
///
/// The mapping may be partial or empty; a missing driver counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverScores(BTreeMap<Driver, u32>);

impl DriverScores {
    /// Creates an empty score set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw score for a driver, replacing any previous value.
    pub fn with_score(mut self, driver: Driver, raw: u32) -> Self {
        self.0.insert(driver, raw);
        self
    }

    /// Returns the raw score for a driver (0 when absent).
    pub fn raw(&self, driver: Driver) -> u32 {
        self.0.get(&driver).copied().unwrap_or(0)
    }

    /// Returns the sum of all raw scores.
    pub fn total(&self) -> u64 {
        Driver::all().iter().map(|d| u64::from(self.raw(*d))).sum()
    }
}

impl FromIterator<(Driver, u32)> for DriverScores {
    fn from_iter<T: IntoIterator<Item = (Driver, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Complete per-driver percentage mapping.
///
/// Always holds exactly four entries summing to 100, with ties broken by
/// driver precedence so that identical inputs sort identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPercentages {
    percentages: BTreeMap<Driver, Percentage>,
}

impl DriverPercentages {
    /// Normalizes raw scores into a complete percentage mapping.
    ///
    /// Uses largest-remainder rounding so the four values sum to exactly
    /// 100. An empty or all-zero score set yields the degenerate even
    /// split of 25 per driver.
    pub fn from_scores(scores: &DriverScores) -> Self {
        let total = scores.total();
        if total == 0 {
            let percentages = Driver::all()
                .iter()
                .map(|d| (*d, Percentage::new(25)))
                .collect();
            return Self { percentages };
        }

        // Floor each share, then hand the leftover points to the largest
        // remainders, precedence first.
        let mut floors: Vec<(Driver, u8, u64)> = Driver::all()
            .iter()
            .map(|d| {
                let scaled = u64::from(scores.raw(*d)) * 100;
                let floor = (scaled / total) as u8;
                let remainder = scaled % total;
                (*d, floor, remainder)
            })
            .collect();

        let assigned: u32 = floors.iter().map(|(_, f, _)| u32::from(*f)).sum();
        let mut leftover = 100u32.saturating_sub(assigned);

        floors.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.precedence().cmp(&b.0.precedence())));
        let mut percentages = BTreeMap::new();
        for (driver, floor, _) in floors {
            let bump = if leftover > 0 { 1 } else { 0 };
            leftover -= u32::from(bump);
            percentages.insert(driver, Percentage::new(floor).saturating_add(bump));
        }

        Self { percentages }
    }

    /// Builds percentages directly from an upstream-supplied mapping,
    /// filling missing drivers with zero.
    pub fn from_raw_percentages(values: &BTreeMap<Driver, u8>) -> Self {
        let percentages = Driver::all()
            .iter()
            .map(|d| (*d, Percentage::new(values.get(d).copied().unwrap_or(0))))
            .collect();
        Self { percentages }
    }

    /// Returns the percentage for a driver.
    pub fn get(&self, driver: Driver) -> Percentage {
        self.percentages
            .get(&driver)
            .copied()
            .unwrap_or(Percentage::ZERO)
    }

    /// Returns all pairs sorted descending by percentage, ties broken by
    /// driver precedence.
    pub fn sorted_pairs(&self) -> Vec<(Driver, Percentage)> {
        let mut pairs: Vec<(Driver, Percentage)> = Driver::all()
            .iter()
            .map(|d| (*d, self.get(*d)))
            .collect();
        pairs.sort_by(|a, b| {
            b.1.value()
                .cmp(&a.1.value())
                .then(a.0.precedence().cmp(&b.0.precedence()))
        });
        pairs
    }

    /// Returns the dominant driver (highest percentage).
    pub fn dominant(&self) -> Driver {
        self.sorted_pairs()[0].0
    }

    /// Returns the secondary driver (second highest percentage).
    pub fn secondary(&self) -> Driver {
        self.sorted_pairs()[1].0
    }

    /// Returns the sum of the four percentages.
    pub fn sum(&self) -> u32 {
        Driver::all()
            .iter()
            .map(|d| u32::from(self.get(*d).value()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_yield_even_split() {
        let pct = DriverPercentages::from_scores(&DriverScores::new());
        for driver in Driver::all() {
            assert_eq!(pct.get(*driver).value(), 25);
        }
    }

    #[test]
    fn even_split_sorts_by_precedence() {
        let pct = DriverPercentages::from_scores(&DriverScores::new());
        let order: Vec<Driver> = pct.sorted_pairs().into_iter().map(|(d, _)| d).collect();
        assert_eq!(order, Driver::all());
    }

    #[test]
    fn equal_nonzero_scores_yield_even_split() {
        let scores: DriverScores = Driver::all().iter().map(|d| (*d, 7)).collect();
        let pct = DriverPercentages::from_scores(&scores);
        for driver in Driver::all() {
            assert_eq!(pct.get(*driver).value(), 25);
        }
    }

    #[test]
    fn percentages_sum_to_exactly_100() {
        let scores = DriverScores::new()
            .with_score(Driver::Control, 3)
            .with_score(Driver::Avoidance, 3)
            .with_score(Driver::Validation, 1);
        let pct = DriverPercentages::from_scores(&scores);
        assert_eq!(pct.sum(), 100);
    }

    #[test]
    fn missing_drivers_get_zero_percent() {
        let scores = DriverScores::new().with_score(Driver::Validation, 10);
        let pct = DriverPercentages::from_scores(&scores);
        assert_eq!(pct.get(Driver::Validation).value(), 100);
        assert_eq!(pct.get(Driver::Control).value(), 0);
        assert_eq!(pct.get(Driver::FearOfRejection).value(), 0);
    }

    #[test]
    fn dominant_and_secondary_follow_sorted_order() {
        let scores = DriverScores::new()
            .with_score(Driver::Control, 45)
            .with_score(Driver::Avoidance, 25)
            .with_score(Driver::Validation, 15)
            .with_score(Driver::FearOfRejection, 15);
        let pct = DriverPercentages::from_scores(&scores);
        assert_eq!(pct.dominant(), Driver::Control);
        assert_eq!(pct.secondary(), Driver::Avoidance);
        assert_eq!(pct.get(Driver::Control).value(), 45);
    }

    #[test]
    fn ties_break_by_precedence() {
        let scores = DriverScores::new()
            .with_score(Driver::Validation, 10)
            .with_score(Driver::Avoidance, 10)
            .with_score(Driver::FearOfRejection, 10);
        let pct = DriverPercentages::from_scores(&scores);
        // 33/33/33 plus one leftover point; remainders tie, so precedence
        // gives the extra point and the top sort slot to Avoidance.
        assert_eq!(pct.dominant(), Driver::Avoidance);
        assert_eq!(pct.get(Driver::Avoidance).value(), 34);
        assert_eq!(pct.sum(), 100);
    }

    #[test]
    fn from_raw_percentages_fills_missing_with_zero() {
        let mut values = BTreeMap::new();
        values.insert(Driver::Control, 45u8);
        values.insert(Driver::Avoidance, 25u8);
        let pct = DriverPercentages::from_raw_percentages(&values);
        assert_eq!(pct.get(Driver::Control).value(), 45);
        assert_eq!(pct.get(Driver::Validation).value(), 0);
    }

    #[test]
    fn large_scores_do_not_overflow() {
        let scores = DriverScores::new()
            .with_score(Driver::Control, u32::MAX)
            .with_score(Driver::Avoidance, 1);
        let pct = DriverPercentages::from_scores(&scores);
        assert_eq!(pct.sum(), 100);
        assert_eq!(pct.dominant(), Driver::Control);
    }
}
