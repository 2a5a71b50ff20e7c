pub mod config;
pub mod llm;
pub mod request_logger;
