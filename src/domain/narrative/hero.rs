//! Hero section - the opening that names the pattern and archetype.

use crate::domain::foundation::Diagnostics;

use super::NarrativeContext;

/// Derives a dominance label when upstream didn't send one.
fn derive_label(dominance: u8) -> &'static str {
    if dominance >= 60 {
        "defining"
    } else if dominance >= 40 {
        "leading"
    } else {
        "emerging"
    }
}

pub(super) fn build(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let greeting = match ctx.personalization.first_name.as_deref() {
        Some(name) if !name.trim().is_empty() => format!("{}, your results are in.", name.trim()),
        _ => {
            diagnostics.record("hero", "first_name");
            "Your results are in.".to_string()
        }
    };

    let label = match ctx.dominance_label {
        Some(label) if !label.trim().is_empty() => label.trim().to_string(),
        _ => {
            diagnostics.record("hero", "dominance_label");
            derive_label(ctx.dominance.value()).to_string()
        }
    };

    format!(
        "{greeting} Your pattern is {pattern}, and your archetype is {archetype}. \
         This pattern shaped {dominance} of your answers, which makes it the {label} \
         force in how you move through the world. It runs on one core belief: \
         \"{belief}\"",
        greeting = greeting,
        pattern = ctx.profile.name.display_name(),
        archetype = ctx.archetype.display_name(),
        dominance = ctx.dominance,
        label = label,
        belief = ctx.profile.core_belief,
    )
}
