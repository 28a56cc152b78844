//! Text-generation provider abstraction.
//!
//! A trait-based seam over the hosted generation API so the backend can be
//! exercised against a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text completion for the given prompt.
    ///
    /// No generation parameters are passed: the provider uses the hosted
    /// model's defaults for temperature, token limits, and sampling.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
