use serde::{Deserialize, Serialize};

/// Placeholder texts returned instead of a summary.
pub const SUMMARY_NO_API_KEY: &str = "Unable to generate insights: API Key missing.";
pub const SUMMARY_FAILED: &str =
    "An error occurred while analyzing the data. Please try again later.";
pub const SUMMARY_EMPTY: &str = "No insights generated.";

/// Ответ с обзором. `generated == false` означает, что `summary` является заглушкой.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummaryResponse {
    pub summary: String,
    pub generated: bool,
}

impl KpiSummaryResponse {
    pub fn generated(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            generated: true,
        }
    }

    pub fn placeholder(text: &str) -> Self {
        Self {
            summary: text.to_string(),
            generated: false,
        }
    }
}
