use super::prompt::build_prompt;
use crate::shared::llm::{ChatMessage, LlmProvider};
use contracts::usecases::u501_kpi_summary::response::{
    SUMMARY_EMPTY, SUMMARY_FAILED, SUMMARY_NO_API_KEY,
};
use contracts::usecases::u501_kpi_summary::{KpiSummaryRequest, KpiSummaryResponse};
use std::sync::Arc;

/// Executor для UseCase генерации обзора KPI
///
/// Никогда не возвращает ошибку: при отсутствии ключа или сбое провайдера
/// отдаёт текст-заглушку с `generated = false`.
pub struct SummaryExecutor {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl SummaryExecutor {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn summarize(&self, request: KpiSummaryRequest) -> KpiSummaryResponse {
        let Some(provider) = &self.provider else {
            return KpiSummaryResponse::placeholder(SUMMARY_NO_API_KEY);
        };

        let (system, prompt) = match build_prompt(&request) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("Failed to serialize KPI data for summary: {}", e);
                return KpiSummaryResponse::placeholder(SUMMARY_FAILED);
            }
        };

        tracing::info!(
            "Generating KPI summary for {} KPIs via {}",
            request.kpis.len(),
            provider.provider_name()
        );

        match provider
            .chat_completion(vec![ChatMessage::system(system), ChatMessage::user(prompt)])
            .await
        {
            Ok(response) => match response.summary_text() {
                Some(text) => {
                    tracing::info!(
                        "KPI summary generated: model={}, tokens={:?}",
                        response.model,
                        response.tokens_used
                    );
                    KpiSummaryResponse::generated(text)
                }
                None => {
                    tracing::warn!("LLM returned an empty summary ({})", response.model);
                    KpiSummaryResponse::placeholder(SUMMARY_EMPTY)
                }
            },
            Err(e) => {
                tracing::error!("KPI summary failed: {}", e);
                KpiSummaryResponse::placeholder(SUMMARY_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::{ChatRole, LlmError, LlmResponse};
    use async_trait::async_trait;
    use contracts::domain::a001_kpi::default_seed;
    use std::sync::Mutex;

    enum Reply {
        Text(&'static str),
        Fail,
    }

    struct FakeProvider {
        reply: Reply,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl FakeProvider {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            self.seen.lock().unwrap().extend(messages);
            match self.reply {
                Reply::Text(text) => Ok(LlmResponse {
                    content: text.to_string(),
                    tokens_used: Some(42),
                    model: "fake".to_string(),
                }),
                Reply::Fail => Err(LlmError::RateLimitExceeded),
            }
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    fn request() -> KpiSummaryRequest {
        KpiSummaryRequest::from_kpis(&default_seed())
    }

    #[tokio::test]
    async fn test_missing_provider_returns_placeholder() {
        let executor = SummaryExecutor::new(None);
        assert!(!executor.is_enabled());
        let response = executor.summarize(request()).await;
        assert!(!response.generated);
        assert_eq!(response.summary, SUMMARY_NO_API_KEY);
    }

    #[tokio::test]
    async fn test_generated_summary() {
        let provider = FakeProvider::new(Reply::Text("  - Revenue is strong\n"));
        let executor = SummaryExecutor::new(Some(provider.clone()));
        let response = executor.summarize(request()).await;
        assert!(response.generated);
        assert_eq!(response.summary, "- Revenue is strong");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, ChatRole::System);
        assert!(seen[1].content.contains("Safety Incidents"));
    }

    #[tokio::test]
    async fn test_provider_error_returns_placeholder() {
        let executor = SummaryExecutor::new(Some(FakeProvider::new(Reply::Fail)));
        let response = executor.summarize(request()).await;
        assert!(!response.generated);
        assert_eq!(response.summary, SUMMARY_FAILED);
    }

    #[tokio::test]
    async fn test_empty_completion_returns_placeholder() {
        let executor = SummaryExecutor::new(Some(FakeProvider::new(Reply::Text("   "))));
        let response = executor.summarize(request()).await;
        assert_eq!(response, KpiSummaryResponse::placeholder(SUMMARY_EMPTY));
    }
}
