use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_kpi_summary::response::SUMMARY_FAILED;
use contracts::usecases::u501_kpi_summary::{KpiSummary, KpiSummaryRequest, KpiSummaryResponse};
use gloo_net::http::Request;

/// API клиент для UseCase u501
pub async fn request_summary(request: &KpiSummaryRequest) -> Result<KpiSummaryResponse, String> {
    let response = Request::post(&api_url(&KpiSummary::endpoint()))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Never fails: a network problem becomes the generic placeholder text.
pub async fn summarize(request: KpiSummaryRequest) -> KpiSummaryResponse {
    match request_summary(&request).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("KPI summary request failed: {}", e);
            KpiSummaryResponse::placeholder(SUMMARY_FAILED)
        }
    }
}
