use super::*;
use crate::score::score_breakdown;

#[test]
fn test_quantiles() {
    let v = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p10(&v), 2.0);
    assert_eq!(min_f32(&v), 1.0);
    assert_eq!(min_f32(&[]), 0.0);
}

#[test]
fn test_summary_without_comparison() {
    let layout = AngleLayout::native_v1();
    let reference = [10.0f32; 10];
    let input = ReportInput {
        layout: &layout,
        reference: &reference,
        reference_source: "ref.json".to_string(),
        comparison: None,
        tool_name: "posescore".to_string(),
        tool_version: "0.0.0".to_string(),
        simd_backend: "scalar".to_string(),
    };
    let summary = build_summary(&input);
    assert_eq!(summary.n_angles, 10);
    assert!(summary.score.is_none());
    assert_eq!(summary.angles[0].name, "right_shoulder");
    assert!(summary.angles.iter().all(|a| a.candidate.is_none()));
}

#[test]
fn test_summary_weakest_angles() {
    let layout = AngleLayout::native_v1();
    let profile = ScoreProfile::native_v1();
    let reference = [90.0f32; 10];
    let mut candidate = [90.0f32; 10];
    candidate[7] = 0.0;
    candidate[2] = 45.0;
    candidate[9] = 45.0;
    let score = score_breakdown(&profile, &reference, &candidate).unwrap();
    let input = ReportInput {
        layout: &layout,
        reference: &reference,
        reference_source: "ref.json".to_string(),
        comparison: Some(Comparison {
            candidate: &candidate,
            candidate_source: "cand.json".to_string(),
            profile: &profile,
            score: &score,
        }),
        tool_name: "posescore".to_string(),
        tool_version: "0.0.0".to_string(),
        simd_backend: "scalar".to_string(),
    };
    let summary = build_summary(&input);
    let s = summary.score.unwrap();
    assert_eq!(s.weakest, vec!["right_hip", "left_shoulder", "right_flank"]);
    assert_eq!(s.min, 50.0);
    assert_eq!(s.profile, "native_v1");
}

#[test]
fn test_json_and_text_render() {
    let layout = AngleLayout::native_v1();
    let reference = [0.0f32, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 170.0, 180.0];
    let input = ReportInput {
        layout: &layout,
        reference: &reference,
        reference_source: "ref.json".to_string(),
        comparison: None,
        tool_name: "posescore".to_string(),
        tool_version: "0.0.0".to_string(),
        simd_backend: "scalar".to_string(),
    };
    let summary = build_summary(&input);
    let json = json::render_summary_json(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["layout"], "native_v1");
    assert_eq!(value["angles"][4]["reference"], 90.0);
    assert!(value.get("score").is_none());

    let text = text::render_report_text(&summary);
    assert!(text.contains("Layout: native_v1 (10 angles)"));
    assert!(!text.contains("3. Similarity"));
}

#[test]
fn test_match_statement_bands() {
    assert!(text::match_statement(100.0).starts_with("strong"));
    assert!(text::match_statement(60.0).starts_with("partial"));
    assert!(text::match_statement(10.0).starts_with("weak"));
}
