//! Workbook section - the fixed journal-prompt sequence.

use crate::domain::foundation::Diagnostics;

use super::NarrativeContext;

pub(super) fn build(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let profile = ctx.profile;

    let (release, anchor) = match ctx.phrases.workbook(profile.name) {
        Some(phrases) => (
            phrases.release_phrase.clone(),
            phrases.anchor_phrase.clone(),
        ),
        None => {
            diagnostics.record("workbook", "phrases");
            (
                format!(
                    "one place this week where the {} pattern decided for me",
                    profile.name.display_name()
                ),
                "The pattern is something I do, not something I am.".to_string(),
            )
        }
    };

    // The prompt sequence is fixed; only the phrasing is pattern-specific.
    let prompts = [
        format!(
            "Catch it live. Notice one moment this week when the old rule \
             \"{}\" grabs the wheel. Write down what happened in the sixty \
             seconds before.",
            profile.core_belief
        ),
        format!("Release. Write about {release}, and what you're afraid happens if you do."),
        format!(
            "Anchor. Copy this sentence at the top of a page and argue with it \
             until it holds: \"{anchor}\""
        ),
        format!(
            "Reset focus. Yours is: {} What is the smallest version of that you \
             could practice tomorrow?",
            profile.reset_focus
        ),
    ];

    let mut out = String::from(
        "Four prompts. One per sitting, in order, pen on paper if you can manage it.",
    );
    for (i, prompt) in prompts.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, prompt));
    }
    out
}
