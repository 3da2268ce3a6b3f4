//! Analyze operation - extension bundle summary.

use std::path::Path;

use itopforge_model::ExtensionSummary;

use crate::reports::AnalyzeReport;

/// Execute the analyze operation.
///
/// Wraps an already computed summary with the bundle it came from.
pub fn analyze(summary: ExtensionSummary, bundle_path: &Path) -> AnalyzeReport {
    AnalyzeReport {
        bundle_path: bundle_path.to_path_buf(),
        field_count: summary.field_count(),
        summary,
    }
}
