use async_trait::async_trait;
use thiserror::Error;

/// Сбой при запросе обзора KPI у модели
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Provider not supported: {0}")]
    UnsupportedProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

/// Одно сообщение промпта: инструкция аналитику (`system`) или данные KPI (`user`)
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Ответ модели на запрос обзора
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub tokens_used: Option<u32>,
    pub model: String,
}

impl LlmResponse {
    /// Текст обзора без обрамляющих пробелов; `None`, если модель ничего не вернула.
    pub fn summary_text(&self) -> Option<&str> {
        let text = self.content.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError>;

    /// Имя провайдера для логов
    fn provider_name(&self) -> &str;
}
