//! Pattern profiles - static descriptive attributes per pattern.
//!
//! Upstream payloads may carry partial profile data; every gap is filled
//! from the canonical tables here so no attribute is ever absent in output.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Diagnostics;

use super::PatternName;

/// Optional secondary psychological descriptor on a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complex {
    pub primary: String,
    pub secondary: Option<String>,
    pub definition: String,
    pub treatment_approaches: Vec<String>,
    pub recovery_indicators: Vec<String>,
}

/// Fully-resolved descriptive attributes for one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternProfile {
    pub name: PatternName,
    pub core_belief: String,
    pub shadow: String,
    pub strength: String,
    pub reset_focus: String,
    pub complex: Option<Complex>,
}

/// Partial pattern payload as upstream sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPattern {
    pub name: Option<String>,
    pub core_belief: Option<String>,
    pub shadow: Option<String>,
    pub strength: Option<String>,
    pub reset_focus: Option<String>,
    pub complex: Option<RawComplex>,
}

/// Partial complex payload as upstream sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawComplex {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub definition: Option<String>,
    pub treatment_approaches: Vec<String>,
    pub recovery_indicators: Vec<String>,
}

impl PatternProfile {
    /// Returns the canonical profile for a pattern.
    pub fn canonical(name: PatternName) -> Self {
        let (core_belief, shadow, strength, reset_focus) = canonical_attributes(name);
        Self {
            name,
            core_belief: core_belief.to_string(),
            shadow: shadow.to_string(),
            strength: strength.to_string(),
            reset_focus: reset_focus.to_string(),
            complex: Some(canonical_complex(name)),
        }
    }

    /// Builds a complete profile from a partial upstream payload.
    ///
    /// Any missing or blank attribute is taken from the canonical table
    /// and recorded in the diagnostics.
    pub fn from_raw(name: PatternName, raw: &RawPattern, diagnostics: &mut Diagnostics) -> Self {
        let canonical = Self::canonical(name);

        let core_belief = pick(raw.core_belief.as_deref(), canonical.core_belief, "core_belief", diagnostics);
        let shadow = pick(raw.shadow.as_deref(), canonical.shadow, "shadow", diagnostics);
        let strength = pick(raw.strength.as_deref(), canonical.strength, "strength", diagnostics);
        let reset_focus = pick(
            raw.reset_focus.as_deref(),
            canonical.reset_focus,
            "reset_focus",
            diagnostics,
        );

        let complex = match (&raw.complex, canonical.complex) {
            (Some(raw_complex), Some(default)) => Some(merge_complex(raw_complex, default, diagnostics)),
            (Some(raw_complex), None) => Some(merge_complex(
                raw_complex,
                canonical_complex(name),
                diagnostics,
            )),
            (None, Some(default)) => {
                diagnostics.record("pattern_profile", "complex");
                Some(default)
            }
            (None, None) => None,
        };

        Self {
            name,
            core_belief,
            shadow,
            strength,
            reset_focus,
            complex,
        }
    }
}

fn pick(
    supplied: Option<&str>,
    default: String,
    field: &'static str,
    diagnostics: &mut Diagnostics,
) -> String {
    match supplied {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => {
            diagnostics.record("pattern_profile", field);
            default
        }
    }
}

fn merge_complex(raw: &RawComplex, default: Complex, diagnostics: &mut Diagnostics) -> Complex {
    let primary = pick(raw.primary.as_deref(), default.primary, "complex.primary", diagnostics);
    let definition = pick(
        raw.definition.as_deref(),
        default.definition,
        "complex.definition",
        diagnostics,
    );
    let secondary = raw.secondary.clone().or(default.secondary);
    let treatment_approaches = if raw.treatment_approaches.is_empty() {
        diagnostics.record("pattern_profile", "complex.treatment_approaches");
        default.treatment_approaches
    } else {
        raw.treatment_approaches.clone()
    };
    let recovery_indicators = if raw.recovery_indicators.is_empty() {
        diagnostics.record("pattern_profile", "complex.recovery_indicators");
        default.recovery_indicators
    } else {
        raw.recovery_indicators.clone()
    };

    Complex {
        primary,
        secondary,
        definition,
        treatment_approaches,
        recovery_indicators,
    }
}

fn canonical_attributes(name: PatternName) -> (&'static str, &'static str, &'static str, &'static str) {
    match name {
        PatternName::Fixer => (
            "If I solve it, I'm safe.",
            "Stepping in to manage everyone's problems → exhaustion and quiet resentment.",
            "Steady under pressure. People trust you in a crisis because you move toward the fire.",
            "Letting outcomes belong to the people they belong to.",
        ),
        PatternName::Perfectionist => (
            "If it's flawless, it can't be rejected.",
            "Polishing past the deadline → missed chances and a voice that is never satisfied.",
            "Exceptional standards. Work that passes through your hands rarely needs checking.",
            "Shipping at good enough and letting feedback finish the job.",
        ),
        PatternName::Pleaser => (
            "If they're happy with me, I'm enough.",
            "Saying yes before checking in with yourself → a calendar full of other people's priorities.",
            "Warmth and attunement. People exhale around you because you read the room first.",
            "Letting someone be briefly disappointed without rushing to repair it.",
        ),
        PatternName::Achiever => (
            "If I keep winning, I'll finally matter.",
            "Chasing the next milestone → arriving nowhere, because arrival keeps moving.",
            "Relentless momentum. You turn vague intentions into finished things.",
            "Building a sense of worth that doesn't report to a scoreboard.",
        ),
        PatternName::Escapist => (
            "If I don't look at it, it can't hurt me.",
            "Numbing out when things get heavy → problems compounding quietly in the dark.",
            "You can find lightness anywhere, and you give other people permission to breathe.",
            "Staying present for the first uncomfortable minute instead of reaching for the exit.",
        ),
        PatternName::Drifter => (
            "If I don't commit, I can't fail.",
            "Keeping every option open → years passing without a direction chosen.",
            "Adaptability. Change that unsettles everyone else feels like home to you.",
            "Choosing one thing and letting the other doors close behind you.",
        ),
        PatternName::GuardedOne => (
            "If I don't let them in, they can't leave me.",
            "Pulling away at the first sign of closeness → the loneliness you were guarding against.",
            "Self-containment. You carry things alone that would flatten most people.",
            "Letting one safe person see an unpolished version of you.",
        ),
        PatternName::Worrier => (
            "If I brace for the worst, it won't blindside me.",
            "Rehearsing every catastrophe → living the loss a hundred times before it happens once.",
            "Foresight. Very little catches you off guard, and people lean on your contingency plans.",
            "Trusting yourself to handle what you couldn't predict.",
        ),
    }
}

fn canonical_complex(name: PatternName) -> Complex {
    match name {
        PatternName::Fixer => Complex {
            primary: "Atlas Complex".to_string(),
            secondary: Some("Hyper-responsibility".to_string()),
            definition: "Carrying responsibility that was never yours to hold, because helplessness once felt dangerous.".to_string(),
            treatment_approaches: vec![
                "Delegation experiments with explicit no-rescue windows".to_string(),
                "Somatic work on the body's urge to intervene".to_string(),
                "Boundary scripts for the requests you usually absorb".to_string(),
            ],
            recovery_indicators: vec![
                "A small problem resolves without you and you let it".to_string(),
                "You ask for help before you are running on empty".to_string(),
                "Rest stops feeling like negligence".to_string(),
            ],
        },
        PatternName::Perfectionist => Complex {
            primary: "Mirror Complex".to_string(),
            secondary: Some("Self-surveillance".to_string()),
            definition: "Measuring your worth against an internal inspector that never signs off.".to_string(),
            treatment_approaches: vec![
                "Deliberate practice at submitting B+ work".to_string(),
                "Cognitive reframing of mistakes as data".to_string(),
                "Time-boxing revisions with a hard stop".to_string(),
            ],
            recovery_indicators: vec![
                "You publish something you know has rough edges".to_string(),
                "Criticism lands as information, not verdict".to_string(),
                "Done starts to feel better than perfect".to_string(),
            ],
        },
        PatternName::Pleaser => Complex {
            primary: "Chameleon Complex".to_string(),
            secondary: Some("Self-abandonment".to_string()),
            definition: "Shapeshifting to match what each room wants until your own preferences go quiet.".to_string(),
            treatment_approaches: vec![
                "Daily preference journaling before consulting anyone".to_string(),
                "Graduated exposure to saying no on small stakes".to_string(),
                "Values clarification work separated from relationships".to_string(),
            ],
            recovery_indicators: vec![
                "You state a preference before asking for theirs".to_string(),
                "Someone's disappointment passes without you fixing it".to_string(),
                "You can name what you want in under a minute".to_string(),
            ],
        },
        PatternName::Achiever => Complex {
            primary: "Summit Complex".to_string(),
            secondary: Some("Conditional worth".to_string()),
            definition: "Tying the right to rest to the next achievement, which is always one achievement away.".to_string(),
            treatment_approaches: vec![
                "Scheduled unproductive time treated as non-negotiable".to_string(),
                "Identity work outside of titles and metrics".to_string(),
                "Celebrating completions before starting the next climb".to_string(),
            ],
            recovery_indicators: vec![
                "A win feels finished instead of immediately insufficient".to_string(),
                "You can describe yourself without your resume".to_string(),
                "An idle afternoon passes without guilt".to_string(),
            ],
        },
        PatternName::Escapist => Complex {
            primary: "Houdini Complex".to_string(),
            secondary: Some("Experiential avoidance".to_string()),
            definition: "Escaping discomfort so quickly that you never learn it was survivable.".to_string(),
            treatment_approaches: vec![
                "Two-minute stays with discomfort before any exit".to_string(),
                "Replacing numbing rituals with naming rituals".to_string(),
                "Accountability check-ins on postponed conversations".to_string(),
            ],
            recovery_indicators: vec![
                "You open the difficult email the day it arrives".to_string(),
                "Discomfort gets named instead of numbed".to_string(),
                "A hard conversation happens on schedule".to_string(),
            ],
        },
        PatternName::Drifter => Complex {
            primary: "Horizon Complex".to_string(),
            secondary: None,
            definition: "Mistaking open options for freedom while the unchosen life quietly shrinks.".to_string(),
            treatment_approaches: vec![
                "Small commitments with visible end dates".to_string(),
                "Decision journaling to surface avoided choices".to_string(),
                "Anchoring routines that survive changes of scenery".to_string(),
            ],
            recovery_indicators: vec![
                "You pick one path and stop auditing the others".to_string(),
                "A commitment survives its first boring stretch".to_string(),
                "Plans extend further than the next fresh start".to_string(),
            ],
        },
        PatternName::GuardedOne => Complex {
            primary: "Fortress Complex".to_string(),
            secondary: Some("Preemptive withdrawal".to_string()),
            definition: "Leaving first, in a hundred small ways, so that no one ever gets to leave you.".to_string(),
            treatment_approaches: vec![
                "Graduated disclosure with one chosen person".to_string(),
                "Tracking the stories told about others' intentions".to_string(),
                "Staying in contact through the urge to vanish".to_string(),
            ],
            recovery_indicators: vec![
                "You share something unfinished about yourself".to_string(),
                "An urge to withdraw is named out loud instead of acted on".to_string(),
                "Being known starts to feel less dangerous than being alone".to_string(),
            ],
        },
        PatternName::Worrier => Complex {
            primary: "Sentinel Complex".to_string(),
            secondary: Some("Anticipatory anxiety".to_string()),
            definition: "Standing permanent guard against futures that mostly never arrive.".to_string(),
            treatment_approaches: vec![
                "Scheduled worry windows with a closing time".to_string(),
                "Probability audits of feared outcomes".to_string(),
                "Grounding practices that return attention to now".to_string(),
            ],
            recovery_indicators: vec![
                "A worry is written down and left until its window".to_string(),
                "You notice a feared outcome simply didn't happen".to_string(),
                "Planning happens once, not on a loop".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_profiles_exist_for_all_patterns() {
        for pattern in PatternName::all() {
            let profile = PatternProfile::canonical(*pattern);
            assert!(!profile.core_belief.is_empty());
            assert!(!profile.shadow.is_empty());
            assert!(!profile.strength.is_empty());
            assert!(!profile.reset_focus.is_empty());
            let complex = profile.complex.expect("canonical complex");
            assert!(!complex.primary.is_empty());
            assert!(!complex.definition.is_empty());
            assert!(!complex.treatment_approaches.is_empty());
            assert!(!complex.recovery_indicators.is_empty());
        }
    }

    #[test]
    fn shadow_follows_behavior_consequence_form() {
        for pattern in PatternName::all() {
            let profile = PatternProfile::canonical(*pattern);
            assert!(
                profile.shadow.contains('→'),
                "{:?} shadow should link behavior to consequence",
                pattern
            );
        }
    }

    #[test]
    fn from_raw_keeps_supplied_values() {
        let raw = RawPattern {
            name: Some("Fixer".to_string()),
            core_belief: Some("If I solve it, I'm safe.".to_string()),
            ..RawPattern::default()
        };
        let mut diag = Diagnostics::new();
        let profile = PatternProfile::from_raw(PatternName::Fixer, &raw, &mut diag);
        assert_eq!(profile.core_belief, "If I solve it, I'm safe.");
        // Everything else came from the canonical table.
        assert!(!profile.shadow.is_empty());
        assert!(!diag.is_clean());
    }

    #[test]
    fn from_raw_backfills_blank_fields() {
        let raw = RawPattern {
            core_belief: Some("   ".to_string()),
            ..RawPattern::default()
        };
        let mut diag = Diagnostics::new();
        let profile = PatternProfile::from_raw(PatternName::Worrier, &raw, &mut diag);
        assert_eq!(
            profile.core_belief,
            PatternProfile::canonical(PatternName::Worrier).core_belief
        );
        assert!(diag
            .defaulted()
            .iter()
            .any(|d| d.field == "core_belief"));
    }

    #[test]
    fn from_raw_merges_partial_complex() {
        let raw = RawPattern {
            complex: Some(RawComplex {
                primary: Some("Custom Complex".to_string()),
                ..RawComplex::default()
            }),
            ..RawPattern::default()
        };
        let mut diag = Diagnostics::new();
        let profile = PatternProfile::from_raw(PatternName::Pleaser, &raw, &mut diag);
        let complex = profile.complex.unwrap();
        assert_eq!(complex.primary, "Custom Complex");
        assert!(!complex.definition.is_empty());
        assert!(!complex.recovery_indicators.is_empty());
    }

    #[test]
    fn from_raw_without_complex_uses_canonical_and_records_it() {
        let mut diag = Diagnostics::new();
        let profile =
            PatternProfile::from_raw(PatternName::Drifter, &RawPattern::default(), &mut diag);
        assert!(profile.complex.is_some());
        assert!(diag.defaulted().iter().any(|d| d.field == "complex"));
    }

    #[test]
    fn raw_pattern_deserializes_from_camel_case_payload() {
        let raw: RawPattern = serde_json::from_str(
            r#"{"name":"Fixer","coreBelief":"If I solve it, I'm safe.","resetFocus":"Letting go."}"#,
        )
        .unwrap();
        assert_eq!(raw.name.as_deref(), Some("Fixer"));
        assert_eq!(raw.reset_focus.as_deref(), Some("Letting go."));
    }
}
