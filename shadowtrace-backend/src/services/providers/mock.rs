//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock text provider for testing.
///
/// Counts every `generate` call so tests can assert that a code path never
/// reached the provider.
pub struct MockTextProvider {
    enabled: bool,
    canned_response: Option<String>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            canned_response: None,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that always returns the given text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            enabled: true,
            canned_response: Some(text.into()),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that fails every generation with an API error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            enabled: true,
            canned_response: None,
            failure: Some(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `generate` calls made against this mock.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        if let Some(message) = &self.failure {
            return Err(ProviderError::ApiError(message.clone()));
        }

        match &self.canned_response {
            Some(text) => Ok(text.clone()),
            None => Ok(format!("Mock response for: {}", prompt)),
        }
    }
}
