//! Golden tests for the matching pipeline.
//!
//! These tests run full questions through a fixed catalog and verify the
//! accepted tag (or its absence) against known cases.

use stockbot_core::{ChatEngine, KnowledgeBase, MatcherConfig, FALLBACK_REPLY};

/// Golden classification case.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    expected_tag: Option<&'static str>,
}

const CATALOG: &str = r#"{
    "entries": [
        {
            "tag": "Amoxicillin",
            "patterns": [
                "do you have amoxicillin in stock",
                "is there amoxicillin available",
                "i need amoxicillin"
            ]
        },
        {
            "tag": "Ibuprofen",
            "patterns": [
                "do you have ibuprofen in stock",
                "any ibuprofen left"
            ]
        },
        {
            "tag": "Paracetamol",
            "patterns": [
                "do you have paracetamol in stock",
                "looking for paracetamol"
            ]
        },
        {
            "tag": "Oxcarbazepine",
            "patterns": [
                "do you have oxcarbazepine in stock",
                "is oxcarbazepine available"
            ],
            "responses": [
                "Oxcarbazepine has been discontinued and is no longer stocked."
            ],
            "response_mode": "curated_random"
        }
    ]
}"#;

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "amoxicillin-verbatim",
            input: "do you have amoxicillin in stock",
            expected_tag: Some("Amoxicillin"),
        },
        GoldenCase {
            id: "amoxicillin-typos",
            input: "do you hav amoxicillin in stok",
            expected_tag: Some("Amoxicillin"),
        },
        GoldenCase {
            id: "amoxicillin-misspelled-name",
            input: "is there amoxicilin available",
            expected_tag: Some("Amoxicillin"),
        },
        GoldenCase {
            id: "ibuprofen-shuffled",
            input: "ibuprofen in stock do you have",
            expected_tag: Some("Ibuprofen"),
        },
        GoldenCase {
            id: "paracetamol-upper-case",
            input: "LOOKING FOR PARACETAMOL",
            expected_tag: Some("Paracetamol"),
        },
        GoldenCase {
            id: "oxcarbazepine-direct",
            input: "is oxcarbazepine available",
            expected_tag: Some("Oxcarbazepine"),
        },
        GoldenCase {
            id: "empty-input",
            input: "",
            expected_tag: None,
        },
        GoldenCase {
            id: "punctuation-only",
            input: "?!?!...",
            expected_tag: None,
        },
        GoldenCase {
            id: "unknown-words-only",
            input: "weather forecast tomorrow please",
            expected_tag: None,
        },
    ]
}

fn setup_engine() -> ChatEngine {
    let kb = KnowledgeBase::from_json(CATALOG).unwrap();
    ChatEngine::new(kb, MatcherConfig::default())
}

#[test]
fn test_golden_classifications() {
    let engine = setup_engine();

    for case in get_golden_cases() {
        let result = engine.classify(case.input);
        assert_eq!(
            result.tag.as_deref(),
            case.expected_tag,
            "case '{}' (input: {:?}, score: {})",
            case.id,
            case.input,
            result.score
        );
    }
}

#[test]
fn test_every_pattern_self_matches_with_full_similarity() {
    let engine = setup_engine();

    for entry in &engine.knowledge_base().entries {
        for pattern in &entry.patterns {
            let result = engine.classify(pattern);
            assert_eq!(result.tag.as_deref(), Some(entry.tag.as_str()));
            assert!(
                (result.score - 1.0).abs() < 1e-9,
                "pattern {:?} scored {}",
                pattern,
                result.score
            );
        }
    }
}

#[test]
fn test_spec_example_end_to_end() {
    let engine = setup_engine();

    let result = engine.classify("do you hav amoxicillin in stok");
    assert_eq!(result.tag.as_deref(), Some("Amoxicillin"));
    assert!((result.score - 1.0).abs() < 1e-9);

    assert_eq!(
        engine.reply("do you hav amoxicillin in stok"),
        "Stock for Amoxicillin is available."
    );
}

#[test]
fn test_discontinued_item_uses_curated_reply() {
    let engine = setup_engine();

    let reply = engine.reply("do you have oxcarbazepine in stock");
    assert_eq!(
        reply,
        "Oxcarbazepine has been discontinued and is no longer stocked."
    );
}

#[test]
fn test_unmatched_input_always_gets_the_fallback_reply() {
    let engine = setup_engine();

    for input in ["", "     ", "?!?!", "unrelated question entirely zzz"] {
        assert_eq!(engine.reply(input), FALLBACK_REPLY, "input: {:?}", input);
    }
}
