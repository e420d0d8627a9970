//! Loophole detection over full policy text.
//!
//! The rule set is a declarative table: each category carries a list of
//! patterns and an extraction mode. Two modes exist:
//!
//! - `MatchedPhrase`: report the literal matched substring (used for the
//!   ambiguous-language phrase regexes, where whitespace between words is
//!   flexible).
//! - `ThroughTerminator`: anchor at a word-boundary keyword and extend
//!   non-greedily through the next `.` or `!` inclusive. A keyword with no
//!   terminator before end of text produces no match; `.` never crosses a
//!   newline.
//!
//! All matching is case-insensitive and non-overlapping. Entries are
//! appended pattern-major, text order within a pattern.

use regex::Regex;

use crate::report::LoopholeReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopholeCategory {
    AmbiguousLanguage,
    ExclusionClauses,
    LimitationFlags,
    ClaimRejectionRisks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extraction {
    /// Report the literal matched substring.
    MatchedPhrase,
    /// Extend from a word-boundary keyword through the next `.` or `!`.
    ThroughTerminator,
}

/// Phrase regexes flagging ambiguous language. Inter-word whitespace is
/// flexible.
const AMBIGUOUS_PATTERNS: &[&str] = &[
    r"may\s+not",
    r"subject\s+to",
    r"contingent\s+upon",
    r"at\s+discretion",
    r"as\s+determined\s+by",
];

const EXCLUSION_KEYWORDS: &[&str] = &[
    "not covered",
    "excluded",
    "limitation",
    "pre-existing condition",
    "waiting period",
];

const REJECTION_KEYWORDS: &[&str] = &[
    "documentation required",
    "proof of",
    "must provide",
    "conditional coverage",
];

struct Rule {
    category: LoopholeCategory,
    patterns: Vec<Regex>,
}

/// Loophole detector handle: the rule table with its patterns compiled once.
pub struct LoopholeDetector {
    rules: Vec<Rule>,
}

impl LoopholeDetector {
    pub fn new() -> Self {
        let table: &[(LoopholeCategory, Extraction, &[&str])] = &[
            (
                LoopholeCategory::AmbiguousLanguage,
                Extraction::MatchedPhrase,
                AMBIGUOUS_PATTERNS,
            ),
            (
                LoopholeCategory::ExclusionClauses,
                Extraction::ThroughTerminator,
                EXCLUSION_KEYWORDS,
            ),
            // No rule feeds LimitationFlags; the category stays in the
            // report shape with an empty pattern list.
            (
                LoopholeCategory::LimitationFlags,
                Extraction::MatchedPhrase,
                &[],
            ),
            (
                LoopholeCategory::ClaimRejectionRisks,
                Extraction::ThroughTerminator,
                REJECTION_KEYWORDS,
            ),
        ];

        let rules = table
            .iter()
            .map(|&(category, extraction, patterns)| Rule {
                category,
                patterns: patterns
                    .iter()
                    .map(|p| compile(p, extraction))
                    .collect(),
            })
            .collect();

        Self { rules }
    }

    /// Scan full policy text. Total: any input string yields a structurally
    /// complete (possibly all-empty) report.
    pub fn detect(&self, text: &str) -> LoopholeReport {
        let mut report = LoopholeReport::default();
        for rule in &self.rules {
            let bucket = bucket_mut(&mut report, rule.category);
            for re in &rule.patterns {
                for m in re.find_iter(text) {
                    bucket.push(m.as_str().to_string());
                }
            }
        }
        report
    }
}

impl Default for LoopholeDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str, extraction: Extraction) -> Regex {
    let full = match extraction {
        Extraction::MatchedPhrase => format!("(?i){pattern}"),
        Extraction::ThroughTerminator => {
            format!(r"(?i)\b{}\b.*?[.!]", regex::escape(pattern))
        }
    };
    // Patterns come from the fixed tables above, not from input.
    Regex::new(&full).unwrap()
}

fn bucket_mut(report: &mut LoopholeReport, category: LoopholeCategory) -> &mut Vec<String> {
    match category {
        LoopholeCategory::AmbiguousLanguage => &mut report.ambiguous_language,
        LoopholeCategory::ExclusionClauses => &mut report.exclusion_clauses,
        LoopholeCategory::LimitationFlags => &mut report.limitation_flags,
        LoopholeCategory::ClaimRejectionRisks => &mut report.claim_rejection_risks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> LoopholeReport {
        LoopholeDetector::new().detect(text)
    }

    #[test]
    fn empty_text_yields_empty_report() {
        assert_eq!(detect(""), LoopholeReport::default());
    }

    #[test]
    fn ambiguous_phrase_reports_matched_substring_only() {
        let report = detect("Renewal is subject to approval.");
        assert_eq!(report.ambiguous_language, vec!["subject to"]);
    }

    #[test]
    fn ambiguous_phrase_tolerates_flexible_whitespace() {
        let report = detect("Payouts are contingent\n   upon review.");
        assert_eq!(report.ambiguous_language, vec!["contingent\n   upon"]);
    }

    #[test]
    fn exclusion_keywords_extend_through_terminator() {
        let report = detect(
            "This is not covered due to exclusions. Please note the waiting period applies.",
        );
        assert_eq!(
            report.exclusion_clauses,
            vec![
                "not covered due to exclusions.",
                "waiting period applies."
            ]
        );
    }

    #[test]
    fn keyword_without_terminator_is_dropped() {
        let report = detect("A waiting period of 30 days may apply");
        assert!(report.exclusion_clauses.is_empty());
    }

    #[test]
    fn terminator_extension_stops_at_newline() {
        // `.` does not cross lines, so a keyword whose terminator is on the
        // next line yields nothing.
        let report = detect("Cataract surgery is excluded\nfor two years");
        assert!(report.exclusion_clauses.is_empty());
    }

    #[test]
    fn rejection_risks_are_detected() {
        let report = detect("You must provide proof of admission within 7 days!");
        assert_eq!(
            report.claim_rejection_risks,
            vec![
                "proof of admission within 7 days!",
                "must provide proof of admission within 7 days!"
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let report = detect("Benefits MAY NOT accrue. NOT COVERED in year one.");
        assert_eq!(report.ambiguous_language, vec!["MAY NOT"]);
        assert_eq!(report.exclusion_clauses, vec!["NOT COVERED in year one."]);
    }

    #[test]
    fn limitation_flags_never_populate() {
        let report = detect("A limitation applies. Another limitation too.");
        assert!(report.limitation_flags.is_empty());
        // The keyword still lands in Exclusion Clauses.
        assert_eq!(report.exclusion_clauses.len(), 2);
    }

    #[test]
    fn duplicates_are_preserved() {
        let report = detect("Claims are subject to review and subject to audit.");
        assert_eq!(report.ambiguous_language, vec!["subject to", "subject to"]);
    }
}
