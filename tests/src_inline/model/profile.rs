use super::*;

#[test]
fn test_default_weights_sum_to_one() {
    let profile = ScoringProfile::default_v1();
    assert!((profile.weights.sum() - 1.0).abs() < 1e-12);
    assert!(profile.validate().is_ok());
    assert_eq!(profile.aggregate_mode, AggregateMode::SevenTerm);
}

#[test]
fn test_legacy_profile_ignores_clarity() {
    let profile = ScoringProfile::legacy_v0();
    assert_eq!(profile.weights.clarity_score, 0.0);
    assert!((profile.weights.sum() - 1.0).abs() < 1e-12);
    assert!(profile.validate().is_ok());
}

#[test]
fn test_partial_json_profile_uses_defaults() {
    let profile: ScoringProfile = serde_json::from_str(r#"{"length_min": 10}"#).unwrap();
    assert_eq!(profile.length_min, 10);
    assert_eq!(profile.length_max, 220);
    assert_eq!(profile.weights, AggregateWeights::seven_term());
}

#[test]
fn test_validate_rejects_unbalanced_weights() {
    let mut profile = ScoringProfile::default_v1();
    profile.weights.structure = 0.5;
    let err = profile.validate().unwrap_err();
    assert!(err.to_string().contains("sum to 1.0"));
}

#[test]
fn test_validate_rejects_inverted_bands() {
    let mut profile = ScoringProfile::default_v1();
    profile.length_min = 300;
    assert!(profile.validate().is_err());

    let mut profile = ScoringProfile::default_v1();
    profile.clarity_lo = 30.0;
    assert!(profile.validate().is_err());

    let mut profile = ScoringProfile::default_v1();
    profile.ngram_n = 0;
    assert!(profile.validate().is_err());
}

#[test]
fn test_from_json_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    let legacy = ScoringProfile::legacy_v0();
    std::fs::write(&path, serde_json::to_string(&legacy).unwrap()).unwrap();
    let loaded = ScoringProfile::from_json_file(&path).unwrap();
    assert_eq!(loaded, legacy);
}
