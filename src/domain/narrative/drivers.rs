//! Driver breakdown and driver-interaction sections.

use crate::domain::foundation::Diagnostics;

use super::NarrativeContext;

pub(super) fn breakdown(ctx: &NarrativeContext<'_>, _diagnostics: &mut Diagnostics) -> String {
    let pairs = ctx.percentages.sorted_pairs();

    let mut out = String::new();
    match ctx.total_score {
        Some(total) => out.push_str(&format!(
            "Four drivers shaped your {} weighted answer points. Here is how they split:\n",
            total
        )),
        None => out.push_str("Four drivers shaped your answers. Here is how they split:\n"),
    }

    for (driver, pct) in &pairs {
        out.push_str(&format!("- {}: {}\n", driver.display_name(), pct));
    }

    let (dominant, dominant_pct) = pairs[0];
    out.push_str(&format!(
        "\n{} leads at {}. {}",
        dominant.display_name(),
        dominant_pct,
        ctx.phrases.driver_blurb(dominant)
    ));

    out
}

pub(super) fn interaction(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let dominant = ctx.percentages.dominant();
    let secondary = ctx.percentages.secondary();

    match ctx.phrases.pair_narrative(dominant, secondary) {
        Some(narrative) => narrative.to_string(),
        None => {
            diagnostics.record("driver_interaction", "pair_narrative");
            format!(
                "Your {} drive leads, with {} close behind. They don't fight each \
                 other so much as take turns steering, and learning which one has \
                 the wheel in a given moment is most of the work.",
                dominant.display_name(),
                secondary.display_name()
            )
        }
    }
}
