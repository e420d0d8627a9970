//! CLI analysis of a local PDF — formatted report on stdout.

use std::path::Path;
use std::sync::Arc;

use clauselens_analyze::{AnalysisResult, PolicyAnalyzer};
use clauselens_core::Result;
use clauselens_ingest::SentenceSegmenter;

/// Analyze a policy PDF on disk and print the formatted report.
pub fn run_analyze(path: &Path) -> Result<AnalysisResult> {
    let analyzer = PolicyAnalyzer::new(Arc::new(SentenceSegmenter::new()));
    let policy_text = clauselens_ingest::extract_text_from_file(path)?;
    let result = analyzer.analyze(&policy_text);
    print_report(&result);
    Ok(result)
}

/// Pretty-print an analysis result. Only non-empty loophole and benefit
/// categories are shown.
pub fn print_report(result: &AnalysisResult) {
    let rule = "=".repeat(80);
    let dash = "-".repeat(80);

    println!("\n{rule}");
    println!("INSURANCE POLICY ANALYSIS");
    println!("{rule}");

    println!("\nLOOPHOLES:");
    println!("{dash}");
    let loophole_sections = [
        ("Ambiguous Language", &result.loopholes.ambiguous_language),
        ("Exclusion Clauses", &result.loopholes.exclusion_clauses),
        ("Limitation Flags", &result.loopholes.limitation_flags),
        (
            "Claim Rejection Risks",
            &result.loopholes.claim_rejection_risks,
        ),
    ];
    for (category, items) in loophole_sections {
        if items.is_empty() {
            continue;
        }
        println!("\n{category}:");
        for item in items.iter() {
            println!("  • {}", item.trim());
        }
    }

    println!("\nBENEFITS:");
    println!("{dash}");
    let benefit_sections = [
        ("Medical Benefits", &result.summary.benefits.medical),
        ("Financial Benefits", &result.summary.benefits.financial),
        ("Additional Benefits", &result.summary.benefits.additional),
    ];
    for (category, items) in benefit_sections {
        if items.is_empty() {
            continue;
        }
        println!("\n{category}:");
        for item in items.iter() {
            println!("  • {}", item.trim());
        }
    }

    println!("\nMAJOR EXCLUSIONS:");
    println!("{dash}");
    for exclusion in &result.summary.major_exclusions {
        println!("  • {}", exclusion.trim());
    }

    println!("\n{rule}");
}
