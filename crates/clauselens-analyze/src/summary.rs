//! Policy summarization over segmented sentences.
//!
//! Every rule is a lowercase substring check; a sentence may land in several
//! buckets. Benefit and highlight rules suppress negated sentences (any
//! occurrence of `"not "` or `"exclude"`); the major-exclusions rule does
//! not, since its keywords are exclusion-positive by construction.

use std::collections::HashSet;
use std::sync::Arc;

use clauselens_ingest::{Sentence, SentenceSegmenter};

use crate::report::{BenefitBuckets, SummaryReport};

/// Fixed section vocabulary; stored capitalized in the report.
const SECTION_NAMES: &[&str] = &[
    "coverage",
    "benefits",
    "exclusions",
    "claims",
    "terms",
    "conditions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BenefitCategory {
    Medical,
    Financial,
    Additional,
}

const BENEFIT_RULES: &[(BenefitCategory, &[&str])] = &[
    (
        BenefitCategory::Medical,
        &[
            "treatment",
            "hospitalization",
            "surgery",
            "medical",
            "health",
            "care",
            "consultation",
        ],
    ),
    (
        BenefitCategory::Financial,
        &[
            "cashless",
            "reimbursement",
            "coverage",
            "sum insured",
            "premium",
            "discount",
        ],
    ),
    (
        BenefitCategory::Additional,
        &["renewal", "bonus", "tax", "family", "additional"],
    ),
];

const HIGHLIGHT_KEYWORDS: &[&str] = &["covered", "benefits", "include"];

const EXCLUSION_KEYWORDS: &[&str] = &["not covered", "excluded", "exclusion", "limitation"];

/// Sentences shorter than this (word count) are ignored by the key-section
/// and benefit rules. Coverage highlights intentionally have no such filter.
const MIN_WORDS: usize = 5;

const SECTION_CAP: usize = 3;
const LIST_CAP: usize = 5;

/// Policy summarizer. Holds the shared segmenter handle; stateless per call.
pub struct PolicySummarizer {
    segmenter: Arc<SentenceSegmenter>,
}

impl PolicySummarizer {
    pub fn new(segmenter: Arc<SentenceSegmenter>) -> Self {
        Self { segmenter }
    }

    /// Classify each sentence of `text` into the summary buckets. Total:
    /// empty text yields an all-empty report.
    pub fn summarize(&self, text: &str) -> SummaryReport {
        let sentences = self.segmenter.segment(text);
        let mut report = SummaryReport::default();

        self.collect_key_sections(&sentences, &mut report);
        self.collect_benefits(&sentences, &mut report.benefits);
        report.coverage_highlights = self.collect_highlights(&sentences);
        report.major_exclusions = self.collect_exclusions(&sentences);

        report
    }

    fn collect_key_sections(&self, sentences: &[Sentence], report: &mut SummaryReport) {
        for section in SECTION_NAMES {
            let matches: Vec<String> = sentences
                .iter()
                .filter(|s| {
                    s.text.to_lowercase().contains(section) && word_count(&s.text) > MIN_WORDS
                })
                .take(SECTION_CAP)
                .map(|s| s.text.clone())
                .collect();
            // Empty categories are omitted from the map entirely.
            if !matches.is_empty() {
                report.key_sections.insert(capitalize(section), matches);
            }
        }
    }

    fn collect_benefits(&self, sentences: &[Sentence], buckets: &mut BenefitBuckets) {
        for sentence in sentences {
            if word_count(&sentence.text) <= MIN_WORDS {
                continue;
            }
            let lower = sentence.text.to_lowercase();
            if is_negated(&lower) {
                continue;
            }
            for &(category, keywords) in BENEFIT_RULES {
                if contains_any(&lower, keywords) {
                    bucket_mut(buckets, category).push(sentence.text.clone());
                }
            }
        }
        for &(category, _) in BENEFIT_RULES {
            let bucket = bucket_mut(buckets, category);
            dedup_keep_first(bucket);
            bucket.truncate(LIST_CAP);
        }
    }

    fn collect_highlights(&self, sentences: &[Sentence]) -> Vec<String> {
        sentences
            .iter()
            .filter(|s| {
                let lower = s.text.to_lowercase();
                contains_any(&lower, HIGHLIGHT_KEYWORDS) && !is_negated(&lower)
            })
            .take(LIST_CAP)
            .map(|s| s.text.clone())
            .collect()
    }

    fn collect_exclusions(&self, sentences: &[Sentence]) -> Vec<String> {
        sentences
            .iter()
            .filter(|s| contains_any(&s.text.to_lowercase(), EXCLUSION_KEYWORDS))
            .take(LIST_CAP)
            .map(|s| s.text.clone())
            .collect()
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

fn is_negated(lower: &str) -> bool {
    lower.contains("not ") || lower.contains("exclude")
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dedup_keep_first(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

fn bucket_mut(buckets: &mut BenefitBuckets, category: BenefitCategory) -> &mut Vec<String> {
    match category {
        BenefitCategory::Medical => &mut buckets.medical,
        BenefitCategory::Financial => &mut buckets.financial,
        BenefitCategory::Additional => &mut buckets.additional,
    }
}
