//! Shared application state.

use std::sync::Arc;

use clauselens_analyze::PolicyAnalyzer;
use clauselens_core::ServerConfig;
use clauselens_ingest::SentenceSegmenter;

/// Shared application state accessible from all route handlers.
///
/// The analyzer (and the segmenter handle inside it) is built once at
/// startup; requests only read it.
pub struct AppState {
    pub config: ServerConfig,
    pub analyzer: PolicyAnalyzer,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let segmenter = Arc::new(SentenceSegmenter::new());
        Self {
            config,
            analyzer: PolicyAnalyzer::new(segmenter),
        }
    }
}
