use super::*;
use crate::metrics::FleschReadingEase;
use crate::pipeline::stage1_prepare::{prepare_prompt, prepare_text};

fn run(prompt: &str, text: &str) -> SubScores {
    let profile = ScoringProfile::default_v1();
    let prepared = prepare_text(text);
    let prompt = prepare_prompt(prompt);
    run_stage2(&Stage2Inputs {
        text: &prepared,
        prompt: &prompt,
        profile: &profile,
        estimator: &FleschReadingEase,
    })
}

#[test]
fn test_empty_text_edge_values() {
    let sub = run("Explain how binary search works", "");
    assert_eq!(sub.lexical_diversity, 0.0);
    assert_eq!(sub.repetition, 0.0);
    assert_eq!(sub.length_ok, 0.0);
    assert_eq!(sub.structure, 0.0);
    assert_eq!(sub.keyword_coverage, 0.0);
    assert_eq!(sub.clarity_score, 0.0);
    assert!((sub.readability - 0.5).abs() < 1e-12);
}

#[test]
fn test_binary_search_scenario() {
    let text = "Binary search repeatedly halves the search interval.\n\nIt requires a sorted array.";
    let sub = run("Explain how binary search works", text);
    assert!(sub.structure >= 0.4);
    // keywords explain, binary, search, works; binary and search are covered
    assert!((sub.keyword_coverage - 0.5).abs() < 1e-12);
    // 12 tokens against a 30-token floor
    assert!((sub.length_ok - 12.0 / 30.0).abs() < 1e-12);
    assert!(sub.length_ok < 1.0);
}

#[test]
fn test_profile_controls_ngram_size() {
    let mut profile = ScoringProfile::default_v1();
    profile.ngram_n = 2;
    let prepared = prepare_text("a b a b");
    let prompt = prepare_prompt("");
    let sub = run_stage2(&Stage2Inputs {
        text: &prepared,
        prompt: &prompt,
        profile: &profile,
        estimator: &FleschReadingEase,
    });
    // bigrams: ab ba ab -> "a b" occurs twice of three
    assert!((sub.repetition - 2.0 / 3.0).abs() < 1e-12);
}
