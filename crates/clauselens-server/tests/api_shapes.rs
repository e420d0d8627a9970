//! API shape tests — validates that the /analyze-policy/ response carries
//! the field names and types existing API consumers expect.
//!
//! These tests build the analyzer directly and serialize the same JSON the
//! handler emits (no HTTP server needed).

use std::sync::Arc;

use clauselens_analyze::PolicyAnalyzer;
use clauselens_ingest::SentenceSegmenter;

const SAMPLE_POLICY: &str = "\
    This policy covers hospitalization and day care treatment for members. \
    Claims are subject to approval by the medical board. \
    Cosmetic surgery is not covered under any circumstances. \
    Cashless reimbursement is available at all network hospitals nationwide.";

fn analysis_response(text: &str) -> serde_json::Value {
    let analyzer = PolicyAnalyzer::new(Arc::new(SentenceSegmenter::new()));
    let result = analyzer.analyze(text);
    serde_json::json!({
        "filename": "policy.pdf",
        "analysis": {
            "loopholes": result.loopholes,
            "benefits": result.summary.benefits,
            "major_exclusions": result.summary.major_exclusions,
            "coverage_highlights": result.summary.coverage_highlights,
        },
    })
}

/// The response projects loopholes, benefits, major exclusions, and coverage
/// highlights under "analysis", keyed by the original category names.
#[test]
fn test_analyze_response_shape() {
    let body = analysis_response(SAMPLE_POLICY);

    assert!(body["filename"].is_string());
    let analysis = &body["analysis"];

    for category in [
        "Ambiguous Language",
        "Exclusion Clauses",
        "Limitation Flags",
        "Claim Rejection Risks",
    ] {
        assert!(analysis["loopholes"][category].is_array(), "{category}");
    }
    for category in ["Medical Benefits", "Financial Benefits", "Additional Benefits"] {
        assert!(analysis["benefits"][category].is_array(), "{category}");
    }
    assert!(analysis["major_exclusions"].is_array());
    assert!(analysis["coverage_highlights"].is_array());
}

/// Empty extraction output (unreadable PDF) still yields the full shape.
#[test]
fn test_empty_text_keeps_full_shape() {
    let body = analysis_response("");
    let analysis = &body["analysis"];

    assert_eq!(analysis["loopholes"]["Ambiguous Language"], serde_json::json!([]));
    assert_eq!(analysis["benefits"]["Medical Benefits"], serde_json::json!([]));
    assert_eq!(analysis["major_exclusions"], serde_json::json!([]));
    assert_eq!(analysis["coverage_highlights"], serde_json::json!([]));
}

/// Values land where the rules say they should.
#[test]
fn test_sample_policy_content() {
    let body = analysis_response(SAMPLE_POLICY);
    let analysis = &body["analysis"];

    assert_eq!(
        analysis["loopholes"]["Ambiguous Language"],
        serde_json::json!(["subject to"])
    );
    let medical = analysis["benefits"]["Medical Benefits"].as_array().unwrap();
    assert!(medical
        .iter()
        .any(|s| s.as_str().unwrap().contains("hospitalization")));
    let exclusions = analysis["major_exclusions"].as_array().unwrap();
    assert!(exclusions
        .iter()
        .any(|s| s.as_str().unwrap().contains("not covered")));
}
