//! Wire types for analysis results.
//!
//! Field names match the JSON shape the original API consumers expect, so
//! every rename is part of the public contract.

use std::collections::BTreeMap;

use serde::Serialize;

/// Matched risk phrases, grouped by loophole category. Sequences are
/// unbounded and duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoopholeReport {
    #[serde(rename = "Ambiguous Language")]
    pub ambiguous_language: Vec<String>,
    #[serde(rename = "Exclusion Clauses")]
    pub exclusion_clauses: Vec<String>,
    /// Declared in the output shape but no rule populates it.
    #[serde(rename = "Limitation Flags")]
    pub limitation_flags: Vec<String>,
    #[serde(rename = "Claim Rejection Risks")]
    pub claim_rejection_risks: Vec<String>,
}

/// Benefit sentences, categorized. Each list is deduplicated
/// (first-occurrence order) and capped at 5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenefitBuckets {
    #[serde(rename = "Medical Benefits")]
    pub medical: Vec<String>,
    #[serde(rename = "Financial Benefits")]
    pub financial: Vec<String>,
    #[serde(rename = "Additional Benefits")]
    pub additional: Vec<String>,
}

/// Serializes as `{}` — declared in the output shape but never populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimProcess {}

/// Simplified policy summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Section name (capitalized) → up to 3 matching sentences. Categories
    /// with no matches are omitted entirely.
    #[serde(rename = "Key Sections")]
    pub key_sections: BTreeMap<String, Vec<String>>,
    /// Up to 5 coverage sentences, document order, no deduplication.
    #[serde(rename = "Coverage Highlights")]
    pub coverage_highlights: Vec<String>,
    #[serde(rename = "Benefits")]
    pub benefits: BenefitBuckets,
    /// Up to 5 exclusion sentences, document order, no deduplication.
    #[serde(rename = "Major Exclusions")]
    pub major_exclusions: Vec<String>,
    #[serde(rename = "Claim Process")]
    pub claim_process: ClaimProcess,
}

/// One analysis request's complete output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "Loopholes")]
    pub loopholes: LoopholeReport,
    #[serde(rename = "Summary")]
    pub summary: SummaryReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_serializes_with_all_fields_present() {
        let json = serde_json::to_value(AnalysisResult::default()).unwrap();

        for category in [
            "Ambiguous Language",
            "Exclusion Clauses",
            "Limitation Flags",
            "Claim Rejection Risks",
        ] {
            assert!(json["Loopholes"][category].is_array(), "{category}");
        }
        assert!(json["Summary"]["Key Sections"].is_object());
        assert!(json["Summary"]["Coverage Highlights"].is_array());
        assert!(json["Summary"]["Benefits"]["Medical Benefits"].is_array());
        assert!(json["Summary"]["Benefits"]["Financial Benefits"].is_array());
        assert!(json["Summary"]["Benefits"]["Additional Benefits"].is_array());
        assert!(json["Summary"]["Major Exclusions"].is_array());
        assert_eq!(json["Summary"]["Claim Process"], serde_json::json!({}));
    }
}
