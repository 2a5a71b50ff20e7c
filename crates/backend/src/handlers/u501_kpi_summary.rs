use axum::Json;
use contracts::usecases::u501_kpi_summary::{KpiSummaryRequest, KpiSummaryResponse};

use crate::usecases::u501_kpi_summary;

/// POST /api/kpi/summary
///
/// Always answers 200: a failed generation is reported through
/// `generated = false` and a placeholder text.
pub async fn summarize(Json(request): Json<KpiSummaryRequest>) -> Json<KpiSummaryResponse> {
    let executor = u501_kpi_summary::get_executor();
    Json(executor.summarize(request).await)
}
