//! Life-area impact section - 8 areas, pattern-keyed challenge and benefit.

use crate::domain::foundation::Diagnostics;
use crate::domain::quiz::LifeDomain;

use super::NarrativeContext;

pub(super) fn build(ctx: &NarrativeContext<'_>, diagnostics: &mut Diagnostics) -> String {
    let mut blocks = Vec::with_capacity(LifeDomain::all().len());
    for domain in LifeDomain::all() {
        blocks.push(area_block(ctx, *domain, diagnostics));
    }
    blocks.join("\n\n")
}

fn area_block(
    ctx: &NarrativeContext<'_>,
    domain: LifeDomain,
    diagnostics: &mut Diagnostics,
) -> String {
    let pattern = ctx.profile.name;
    let mut out = format!("## {}\n", domain.display_name());

    // The Love area opens with the relationship-status branch.
    if domain == LifeDomain::Love {
        let opener = match ctx.personalization.relationship_status {
            Some(status) => ctx.phrases.love_branch(pattern, status),
            None => {
                diagnostics.record("life_areas", "relationship_status");
                ctx.phrases.love_generic(pattern)
            }
        };
        out.push_str(opener);
        out.push(' ');
    }

    match ctx.phrases.life_area(pattern, domain) {
        Some(entry) => {
            out.push_str(&entry.challenge);
            out.push_str(" At the same time: ");
            out.push_str(&entry.benefit);
        }
        None => {
            diagnostics.record("life_areas", format!("entry:{:?}", domain));
            out.push_str(&format!(
                "As {}, this area carries the signature of your pattern: the same \
                 belief that protects you elsewhere sets the terms here too.",
                pattern.display_name()
            ));
        }
    }

    match ctx.slices.callouts(domain).first() {
        Some(callout) => {
            out.push_str(&format!(
                "\nBased on your answer \"{}\" to \"{}\", this is likely an area \
                 where the pattern is active for you right now.",
                callout.option_text, callout.question_text
            ));
        }
        None => {
            diagnostics.record("life_areas", format!("answer_callout:{:?}", domain));
        }
    }

    out
}
