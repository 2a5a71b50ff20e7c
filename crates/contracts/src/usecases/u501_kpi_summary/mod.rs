pub mod request;
pub mod response;

pub use request::{KpiSummaryItem, KpiSummaryRequest};
pub use response::KpiSummaryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct KpiSummary;

impl UseCaseMetadata for KpiSummary {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "kpi_summary"
    }

    fn display_name() -> &'static str {
        "AI Executive Summary"
    }

    fn description() -> &'static str {
        "Краткий управленческий обзор текущих KPI, сгенерированный LLM"
    }
}
