//! Framework-confidence bar chart builder.

use crate::chart::schema::{ConfidenceChart, ConfidenceConfig, ConfidenceEntry};
use crate::report::schema::FrameworkScore;
use crate::utils::config::{CONFIDENCE_FORMAT, CONFIDENCE_SCALE};

/// Build the confidence bar chart from per-framework scores.
///
/// **Public** - main entry point for confidence charting
///
/// Scores in [0, 1] are scaled to percentages; input order is preserved
/// so the front end renders frameworks in detection-report order.
pub fn confidence_chart(scores: &[FrameworkScore]) -> ConfidenceChart {
    ConfidenceChart {
        chart_type: "bar".to_string(),
        data: scores
            .iter()
            .map(|score| ConfidenceEntry {
                framework: score.framework.clone(),
                confidence: score.confidence * CONFIDENCE_SCALE,
            })
            .collect(),
        config: ConfidenceConfig {
            x_axis: "framework".to_string(),
            y_axis: "confidence".to_string(),
            y_format: CONFIDENCE_FORMAT.to_string(),
        },
    }
}
