//! Exposure analysis engine.
//!
//! Builds the prompt for the generation provider and wraps the returned text
//! in the fixed response envelope. Constructed once at startup with the
//! credential and provider handle, then shared across requests.

use crate::config::GEMINI_API_KEY_VAR;
use crate::models::{AnalysisReport, RiskLevel};
use crate::services::providers::{ProviderError, TextProvider};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

const SHORT_SUMMARY: &str = "Simulated digital exposure analysis completed.";
const NOTE: &str = "Educational use only. No real data accessed.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0} not configured on server")]
    NotConfigured(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Analysis engine backed by a text-generation provider.
#[derive(Clone)]
pub struct AnalysisEngine {
    api_key: String,
    provider: Arc<dyn TextProvider>,
}

impl AnalysisEngine {
    pub fn new(api_key: impl Into<String>, provider: Arc<dyn TextProvider>) -> Self {
        Self {
            api_key: api_key.into(),
            provider,
        }
    }

    /// Whether the credential is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Run one analysis over the submitted payload.
    ///
    /// Fails with a configuration error before any outbound call when the
    /// credential is absent. Provider failures propagate to the caller.
    pub async fn analyze(&self, payload: &Value) -> Result<AnalysisReport, AnalysisError> {
        if !self.is_configured() {
            return Err(AnalysisError::NotConfigured(GEMINI_API_KEY_VAR));
        }

        let prompt = build_prompt(payload);
        let ai_output = self.provider.generate(&prompt).await?;

        // The model text is echoed verbatim; risk level and summary are
        // fixed values of the current logic, not derived from the output.
        Ok(AnalysisReport {
            risk_level: RiskLevel::Medium,
            short_summary: SHORT_SUMMARY.to_string(),
            ai_output,
            note: NOTE.to_string(),
        })
    }
}

/// Assemble the single prompt sent to the provider.
fn build_prompt(payload: &Value) -> String {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

    format!(
        "You are a cybersecurity awareness assistant.\n\
         \n\
         This is an EDUCATIONAL project.\n\
         Do NOT mention hacking, breaches, or illegal activity.\n\
         \n\
         Input data:\n\
         {rendered}\n\
         \n\
         Return the response strictly in plain text with:\n\
         - risk_level (Low / Medium / High)\n\
         - short_summary\n\
         - 4 security recommendations\n\
         \n\
         Respond clearly and concisely.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;
    use serde_json::json;

    #[test]
    fn prompt_embeds_payload_and_instructions() {
        let prompt = build_prompt(&json!({"email": "test@example.com"}));

        assert!(prompt.contains("cybersecurity awareness assistant"));
        assert!(prompt.contains("test@example.com"));
        assert!(prompt.contains("- risk_level (Low / Medium / High)"));
        assert!(prompt.contains("- 4 security recommendations"));
    }

    #[tokio::test]
    async fn analyze_echoes_provider_text() {
        let provider = Arc::new(MockTextProvider::with_response(
            "Risk: Low. Use strong passwords.",
        ));
        let engine = AnalysisEngine::new("test-api-key", provider);

        let report = engine
            .analyze(&json!({"email": "test@example.com"}))
            .await
            .expect("analysis should succeed");

        assert_eq!(report.ai_output, "Risk: Low. Use strong passwords.");
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.short_summary, SHORT_SUMMARY);
        assert_eq!(report.note, NOTE);
    }

    #[tokio::test]
    async fn analyze_fails_fast_without_credential() {
        let provider = Arc::new(MockTextProvider::new(true));
        let engine = AnalysisEngine::new("", provider.clone());

        let err = engine
            .analyze(&json!({"email": "test@example.com"}))
            .await
            .expect_err("missing credential must fail");

        assert!(matches!(err, AnalysisError::NotConfigured(_)));
        assert_eq!(err.to_string(), "GEMINI_API_KEY not configured on server");
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn risk_level_ignores_provider_output() {
        let provider = Arc::new(MockTextProvider::with_response(
            "Risk: High! Everything is exposed.",
        ));
        let engine = AnalysisEngine::new("test-api-key", provider);

        let report = engine.analyze(&json!({"name": "x"})).await.unwrap();

        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let provider = Arc::new(MockTextProvider::failing("quota exceeded"));
        let engine = AnalysisEngine::new("test-api-key", provider);

        let err = engine.analyze(&json!({"a": 1})).await.unwrap_err();

        assert!(matches!(err, AnalysisError::Provider(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
