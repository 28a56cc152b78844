use crate::models::AnalysisReport;
use crate::services::AnalysisError;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

/// Run an exposure analysis over an arbitrary JSON payload.
///
/// The payload has no enforced schema: anything non-empty is forwarded to
/// the analysis engine. A missing, malformed, or empty body is rejected
/// before the engine is consulted.
#[tracing::instrument(skip(state, body))]
pub async fn analyze(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<AnalysisReport>, AppError> {
    let payload = match body {
        Some(Json(payload)) if !payload_is_empty(&payload) => payload,
        _ => {
            return Err(AppError::BadRequest(anyhow::anyhow!("No input provided")));
        }
    };

    match state.engine.analyze(&payload).await {
        Ok(report) => {
            tracing::info!(
                ai_output_len = report.ai_output.len(),
                "Analysis completed"
            );
            Ok(Json(report))
        }
        Err(err @ AnalysisError::NotConfigured(_)) => {
            tracing::error!(error = %err, "Analysis rejected: credential missing");
            Err(AppError::ConfigError(anyhow::anyhow!(err)))
        }
        Err(AnalysisError::Provider(err)) => {
            tracing::error!(error = %err, "Analysis failed");
            Err(AppError::AnalysisFailed(anyhow::anyhow!(err)))
        }
    }
}

/// An "empty" payload carries no analyzable content: JSON null, false, zero,
/// an empty string, array, or object.
fn payload_is_empty(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payloads_are_rejected() {
        assert!(payload_is_empty(&Value::Null));
        assert!(payload_is_empty(&json!(false)));
        assert!(payload_is_empty(&json!(0)));
        assert!(payload_is_empty(&json!("")));
        assert!(payload_is_empty(&json!([])));
        assert!(payload_is_empty(&json!({})));
    }

    #[test]
    fn non_empty_payloads_are_accepted() {
        assert!(!payload_is_empty(&json!({"email": "test@example.com"})));
        assert!(!payload_is_empty(&json!([1, 2, 3])));
        assert!(!payload_is_empty(&json!("text")));
        assert!(!payload_is_empty(&json!(42)));
        assert!(!payload_is_empty(&json!(true)));
    }
}
