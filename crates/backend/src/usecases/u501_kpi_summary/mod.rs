pub mod executor;
pub mod prompt;

pub use executor::SummaryExecutor;

use crate::shared::llm::LlmProvider;
use once_cell::sync::OnceCell;
use std::sync::Arc;

static SUMMARY_EXECUTOR: OnceCell<Arc<SummaryExecutor>> = OnceCell::new();

/// Register the executor once at startup. `provider == None` keeps the
/// endpoint alive and answers with the "API Key missing" placeholder.
pub fn initialize(provider: Option<Arc<dyn LlmProvider>>) {
    if SUMMARY_EXECUTOR
        .set(Arc::new(SummaryExecutor::new(provider)))
        .is_err()
    {
        tracing::warn!("u501 summary executor already initialized");
    }
}

pub fn get_executor() -> Arc<SummaryExecutor> {
    SUMMARY_EXECUTOR
        .get_or_init(|| Arc::new(SummaryExecutor::new(None)))
        .clone()
}
