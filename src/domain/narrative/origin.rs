//! Origin-story section - branches on childhood-domain answer leanings.

use crate::domain::foundation::Diagnostics;
use crate::domain::quiz::LifeDomain;
use crate::domain::scoring::Driver;

use super::NarrativeContext;

pub(super) fn build(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let counts = ctx.slices.driver_counts(LifeDomain::Family);
    let control = counts.get(&Driver::Control).copied().unwrap_or(0);
    let avoidance = counts.get(&Driver::Avoidance).copied().unwrap_or(0);

    let belief = &ctx.profile.core_belief;
    let pattern = ctx.profile.name.display_name();

    if ctx.slices.callouts(LifeDomain::Family).is_empty() {
        diagnostics.record("origin_story", "childhood_answers");
        return format!(
            "Patterns like {pattern} are rarely invented in adulthood. Somewhere \
             early, \"{belief}\" was less a belief than a survival strategy, and it \
             worked well enough to stay. What protected you then is what limits you \
             now, and seeing that clearly is the first real step of a reset."
        );
    }

    if control > avoidance {
        format!(
            "Your answers about family point toward an early world that rewarded \
             taking charge. When the adults around you were unpredictable or \
             overloaded, stepping up was how a child stayed safe, and \"{belief}\" \
             was born as a job description before it became a personality. \
             {pattern} is what that job looks like decades later."
        )
    } else if avoidance > control {
        format!(
            "Your answers about family point toward an early world where the safest \
             move was to go quiet and stay out of the way. Disappearing from \
             conflict worked, and \"{belief}\" grew out of that practiced absence. \
             {pattern} is what that early retreat looks like decades later."
        )
    } else {
        format!(
            "Your answers about family pull evenly in two directions, toward taking \
             charge and toward staying clear, which usually means you learned both \
             moves early and still alternate between them. \"{belief}\" is the \
             thread that ties the two together, and {pattern} is where it settled."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::narrative::{Personalization, PhraseLibrary};
    use crate::domain::pattern::{PatternName, PatternProfile};
    use crate::domain::quiz::{
        AnswerOption, AnswerSet, DomainRange, DomainRangeTable, DomainSlices, Question,
        QuestionBank,
    };
    use crate::domain::scoring::{DriverPercentages, DriverScores};
    use chrono::NaiveDate;

    fn slices_with_family_answers(drivers: &[Driver]) -> DomainSlices {
        let bank = QuestionBank::new(
            drivers
                .iter()
                .enumerate()
                .map(|(i, driver)| Question {
                    text: format!("Family question {}", i),
                    options: vec![AnswerOption {
                        text: format!("Answer {}", i),
                        driver: *driver,
                    }],
                })
                .collect(),
        );
        let answers: AnswerSet = (0..drivers.len()).map(|_| Some(0)).collect();
        let table = DomainRangeTable::new().with_range(
            LifeDomain::Family,
            DomainRange::new(0, drivers.len().saturating_sub(1)),
        );
        DomainSlices::extract(&answers, &table, &bank)
    }

    fn run(slices: DomainSlices) -> (String, Diagnostics) {
        let profile = PatternProfile::canonical(PatternName::Fixer);
        let percentages = DriverPercentages::from_scores(&DriverScores::new());
        let personalization = Personalization::default();
        let ctx = NarrativeContext {
            profile: &profile,
            archetype: profile.name.archetype(),
            percentages: &percentages,
            dominance: Percentage::new(45),
            dominance_label: None,
            total_score: None,
            slices: &slices,
            personalization: &personalization,
            phrases: PhraseLibrary::default_library(),
            today: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        };
        let mut diag = Diagnostics::new();
        let text = build(&ctx, &mut diag);
        (text, diag)
    }

    #[test]
    fn control_leaning_answers_get_the_taking_charge_branch() {
        let slices =
            slices_with_family_answers(&[Driver::Control, Driver::Control, Driver::Avoidance]);
        let (text, diag) = run(slices);
        assert!(text.contains("rewarded taking charge"));
        assert!(diag.is_clean());
    }

    #[test]
    fn avoidance_leaning_answers_get_the_stay_quiet_branch() {
        let slices =
            slices_with_family_answers(&[Driver::Avoidance, Driver::Avoidance, Driver::Control]);
        let (text, _) = run(slices);
        assert!(text.contains("go quiet and stay out of the way"));
    }

    #[test]
    fn balanced_answers_get_the_even_pull_branch() {
        let slices = slices_with_family_answers(&[Driver::Control, Driver::Avoidance]);
        let (text, _) = run(slices);
        assert!(text.contains("pull evenly in two directions"));
    }

    #[test]
    fn no_childhood_answers_falls_back_and_records() {
        let (text, diag) = run(DomainSlices::default());
        assert!(text.contains("rarely invented in adulthood"));
        assert!(diag.has_location("origin_story"));
    }
}
