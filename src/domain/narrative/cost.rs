//! Cost-and-urgency section, including the next-reset-date placeholder.

use chrono::{Datelike, NaiveDate};

use crate::domain::foundation::Diagnostics;

use super::NarrativeContext;

/// Name of the placeholder node the view layer updates post-insertion.
pub const NEXT_RESET_DATE_PLACEHOLDER: &str = "next-reset-date";

/// Age at which behavioral patterns are treated as set, for the
/// years-lived-with-it estimate.
const PATTERN_FORMATION_AGE: u8 = 12;

/// Returns the first day of the month after `today`.
pub fn next_reset_date(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

/// Formats a reset date the way the report prints it.
pub fn format_reset_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

pub(super) fn build(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let pattern = ctx.profile.name.display_name();

    let mut out = format!(
        "{pattern} isn't a quirk; at {dominance} of your answers it is the operating \
         system underneath your decisions. Left alone, patterns don't fade, they \
         compound: the same trade gets made daily until it looks like a life.",
        pattern = pattern,
        dominance = ctx.dominance,
    );

    match ctx.personalization.exact_age {
        Some(age) if age > PATTERN_FORMATION_AGE => {
            let years = age - PATTERN_FORMATION_AGE;
            out.push_str(&format!(
                " You've likely been running it for around {} years, which is exactly \
                 why it feels less like a habit and more like who you are.",
                years
            ));
        }
        _ => {
            diagnostics.record("cost", "exact_age");
        }
    }

    out.push_str(&format!(
        " The good news is that patterns this consistent respond to structure. Your \
         next reset window begins on {{{{{}}}}}.",
        NEXT_RESET_DATE_PLACEHOLDER
    ));

    out
}
