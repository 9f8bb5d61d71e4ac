pub mod client;
pub mod prompts;

pub use client::{
    ModelConfig, OpenRouterClient, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("generation timed out after {0}s")]
    Timeout(u64),

    #[error("generation unavailable: {0}")]
    Unavailable(String),

    #[error("generation worker is gone")]
    WorkerGone,
}

/// Synchronous generation capability as the core sees it. One operation,
/// prompt in, text out; callers decide what a failure means (the quiz
/// degrades to a placeholder, the vocabulary generator reports it).
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Async boundary implemented by the OpenRouter client. Kept as a trait so
/// the worker loop can be driven by a scripted backend in tests.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: Option<&ModelConfig>,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
