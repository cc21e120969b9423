//! End-to-end assembly tests through the public crate surface.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use pattern_compass::adapters::BufferSink;
use pattern_compass::application::{RenderInput, ReportAssembler};
use pattern_compass::domain::narrative::{PhraseLibrary, SectionKind, NEXT_RESET_DATE_PLACEHOLDER};
use pattern_compass::domain::pattern::{RawArchetype, RawPattern, ERROR_LOADING_RESULTS};
use pattern_compass::domain::quiz::{AnswerOption, DomainRangeTable, Question, QuestionBank};
use pattern_compass::domain::scoring::Driver;

const TODAY: (i32, u32, u32) = (2026, 8, 5);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

/// A 40-question bank lining up with the fallback domain ranges
/// (five questions per life area, canonical order).
fn full_bank() -> QuestionBank {
    QuestionBank::new(
        (0..40)
            .map(|i| Question {
                text: format!("When this comes up in area {}, what do you do?", i / 5),
                options: vec![
                    AnswerOption {
                        text: format!("Take it over myself ({})", i),
                        driver: Driver::Control,
                    },
                    AnswerOption {
                        text: format!("Change the subject ({})", i),
                        driver: Driver::Avoidance,
                    },
                ],
            })
            .collect(),
    )
}

fn amy_input() -> RenderInput {
    let mut percentages = BTreeMap::new();
    percentages.insert(Driver::Control, 45u8);
    percentages.insert(Driver::Avoidance, 25u8);
    percentages.insert(Driver::Validation, 15u8);
    percentages.insert(Driver::FearOfRejection, 15u8);
    RenderInput {
        pattern: RawPattern {
            name: Some("Fixer".to_string()),
            core_belief: Some("If I solve it, I'm safe.".to_string()),
            ..RawPattern::default()
        },
        archetype: RawArchetype {
            name: Some("The Anchor".to_string()),
        },
        pattern_dominance: Some(45),
        driver_percentages: Some(percentages),
        first_name: Some("Amy".to_string()),
        relationship_status: Some("single".to_string()),
        answers: Some((0..40).map(|_| Some(0)).collect()),
        ..RenderInput::default()
    }
}

#[test]
fn spec_worked_example_composes_the_expected_report() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);
    let mut sink = BufferSink::new();

    let outcome = assembler.render(&amy_input(), today(), &mut sink);

    assert!(!outcome.report.is_error());
    assert_eq!(outcome.report.sections.len(), 8);

    // Hero names pattern and archetype.
    let hero = outcome.report.section(SectionKind::Hero).unwrap();
    assert!(hero.contains("Amy"));
    assert!(hero.contains("The Fixer"));
    assert!(hero.contains("The Anchor"));
    assert!(hero.contains("45%"));

    // Driver breakdown lists Control first at 45%.
    let breakdown = outcome.report.section(SectionKind::DriverBreakdown).unwrap();
    let control_pos = breakdown.find("Control: 45%").expect("control line");
    let avoidance_pos = breakdown.find("Avoidance: 25%").expect("avoidance line");
    assert!(control_pos < avoidance_pos);

    // Love impact uses the single-branch Fixer text.
    let impacts = outcome.report.section(SectionKind::LifeAreaImpacts).unwrap();
    assert!(impacts.contains("drawn to people who arrive as projects"));

    // Answer callouts quote the user's own selections.
    assert!(impacts.contains("Based on your answer"));
    assert!(impacts.contains("Take it over myself"));
}

#[test]
fn document_and_reset_placeholder_reach_the_sink() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);
    let mut sink = BufferSink::new();

    let outcome = assembler.render(&amy_input(), today(), &mut sink);

    assert_eq!(sink.document(), Some(outcome.report.document().as_str()));
    assert_eq!(
        sink.placeholder(NEXT_RESET_DATE_PLACEHOLDER),
        Some("September 1, 2026")
    );
    let resolved = sink.resolved_document().unwrap();
    assert!(resolved.contains("September 1, 2026"));
}

#[test]
fn identical_inputs_compose_byte_identical_documents() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);

    let mut first = BufferSink::new();
    let mut second = BufferSink::new();
    assembler.render(&amy_input(), today(), &mut first);
    assembler.render(&amy_input(), today(), &mut second);

    assert_eq!(first.document(), second.document());
    assert_eq!(first.resolved_document(), second.resolved_document());
}

#[test]
fn missing_identity_yields_only_the_error_fragment() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);

    for input in [
        RenderInput::default(),
        RenderInput {
            pattern: RawPattern {
                name: Some("Fixer".to_string()),
                ..RawPattern::default()
            },
            ..RenderInput::default()
        },
        RenderInput {
            pattern: RawPattern {
                name: Some("Overachiever".to_string()),
                ..RawPattern::default()
            },
            archetype: RawArchetype {
                name: Some("The Anchor".to_string()),
            },
            ..RenderInput::default()
        },
    ] {
        let mut sink = BufferSink::new();
        let outcome = assembler.render(&input, today(), &mut sink);
        assert!(outcome.report.is_error());
        assert_eq!(outcome.report.document(), ERROR_LOADING_RESULTS);
        assert_eq!(sink.document(), Some(ERROR_LOADING_RESULTS));
    }
}

#[test]
fn identity_only_input_still_renders_every_section() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);
    let mut sink = BufferSink::new();

    let input = RenderInput {
        pattern: RawPattern {
            name: Some("Worrier".to_string()),
            ..RawPattern::default()
        },
        archetype: RawArchetype {
            name: Some("The Guardian".to_string()),
        },
        ..RenderInput::default()
    };
    let outcome = assembler.render(&input, today(), &mut sink);

    assert!(!outcome.report.is_error());
    assert_eq!(outcome.report.sections.len(), 8);
    for section in &outcome.report.sections {
        assert!(!section.text.is_empty(), "{:?} is empty", section.kind);
    }
    // No answers anywhere: the answer-quoting callouts all fell back.
    let impacts = outcome.report.section(SectionKind::LifeAreaImpacts).unwrap();
    assert!(!impacts.contains("Based on your answer"));
    assert!(!outcome.diagnostics.is_clean());
}

#[test]
fn every_pattern_renders_under_its_own_archetype() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);

    let roster = [
        ("Fixer", "The Anchor"),
        ("Perfectionist", "The Anchor"),
        ("Pleaser", "The Catalyst"),
        ("Achiever", "The Catalyst"),
        ("Escapist", "The Wanderer"),
        ("Drifter", "The Wanderer"),
        ("Withdrawer", "The Guardian"),
        ("Worrier", "The Guardian"),
    ];
    for (pattern, archetype) in roster {
        let input = RenderInput {
            pattern: RawPattern {
                name: Some(pattern.to_string()),
                ..RawPattern::default()
            },
            archetype: RawArchetype {
                name: Some(archetype.to_string()),
            },
            ..RenderInput::default()
        };
        let mut sink = BufferSink::new();
        let outcome = assembler.render(&input, today(), &mut sink);
        assert!(!outcome.report.is_error(), "{} failed to render", pattern);
        assert_eq!(outcome.report.sections.len(), 8);
        let impacts = outcome.report.section(SectionKind::LifeAreaImpacts).unwrap();
        // Each of the eight life-area headings composed non-empty text.
        assert_eq!(impacts.matches("## ").count(), 8, "{} area count", pattern);
    }
}

#[test]
fn legacy_withdrawer_alias_renders_as_the_guarded_one() {
    let bank = full_bank();
    let ranges = DomainRangeTable::fallback();
    let assembler = ReportAssembler::new(PhraseLibrary::default_library(), &bank, &ranges);
    let mut sink = BufferSink::new();

    let input = RenderInput {
        pattern: RawPattern {
            name: Some("Withdrawer".to_string()),
            ..RawPattern::default()
        },
        archetype: RawArchetype {
            name: Some("The Guardian".to_string()),
        },
        ..RenderInput::default()
    };
    let outcome = assembler.render(&input, today(), &mut sink);
    let hero = outcome.report.section(SectionKind::Hero).unwrap();
    assert!(hero.contains("The Guarded One"));
    assert!(!hero.contains("Withdrawer"));
}
