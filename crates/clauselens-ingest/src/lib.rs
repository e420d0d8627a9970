//! ClauseLens Ingest — PDF text extraction and sentence segmentation.

pub mod pdf;
pub mod segment;

pub use pdf::{extract_text, extract_text_from_file};
pub use segment::{Sentence, SentenceSegmenter};
