//! Pattern deep-dive section - belief, shadow, strength, reset focus.

use crate::domain::foundation::Diagnostics;

use super::NarrativeContext;

pub(super) fn build(ctx: &NarrativeContext<'_>, _diagnostics: &mut Diagnostics) -> String {
    let profile = ctx.profile;

    let mut out = format!(
        "{name} organizes itself around the belief \"{belief}\" Its shadow side: \
         {shadow} Its genuine strength: {strength} Your reset focus: {reset}",
        name = profile.name.display_name(),
        belief = profile.core_belief,
        shadow = profile.shadow,
        strength = profile.strength,
        reset = profile.reset_focus,
    );

    if let Some(complex) = &profile.complex {
        out.push_str(&format!(
            "\n\nUnderneath it runs what we call the {}{}. {}",
            complex.primary,
            complex
                .secondary
                .as_deref()
                .map(|s| format!(" (with threads of {})", s.to_lowercase()))
                .unwrap_or_default(),
            complex.definition
        ));
        if !complex.treatment_approaches.is_empty() {
            out.push_str("\n\nWhat helps:");
            for approach in &complex.treatment_approaches {
                out.push_str(&format!("\n- {}", approach));
            }
        }
        if !complex.recovery_indicators.is_empty() {
            out.push_str("\n\nYou will know it's loosening when:");
            for indicator in &complex.recovery_indicators {
                out.push_str(&format!("\n- {}", indicator));
            }
        }
    }

    out
}
