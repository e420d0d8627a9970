//! ClauseLens Analyze — heuristic loophole detection and policy
//! summarization over extracted policy text.
//!
//! All decisions are deterministic rules over string content: regex phrase
//! tables and keyword substring matching. There is no model inference and no
//! state shared across calls; `analyze` is a pure function of its input.

pub mod loopholes;
pub mod report;
pub mod summary;

use std::sync::Arc;

use clauselens_ingest::SentenceSegmenter;

pub use loopholes::LoopholeDetector;
pub use report::{AnalysisResult, BenefitBuckets, LoopholeReport, SummaryReport};
pub use summary::PolicySummarizer;

/// Composes the loophole detector and the summarizer. The two run
/// independently over the same full text; neither observes the other's
/// output.
pub struct PolicyAnalyzer {
    detector: LoopholeDetector,
    summarizer: PolicySummarizer,
}

impl PolicyAnalyzer {
    /// Build an analyzer around a shared segmenter handle. Pattern
    /// compilation happens here, once, not per request.
    pub fn new(segmenter: Arc<SentenceSegmenter>) -> Self {
        Self {
            detector: LoopholeDetector::new(),
            summarizer: PolicySummarizer::new(segmenter),
        }
    }

    /// Analyze full policy text. Never fails; empty input produces a
    /// structurally complete, all-empty result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        AnalysisResult {
            loopholes: self.detector.detect(text),
            summary: self.summarizer.summarize(text),
        }
    }
}
