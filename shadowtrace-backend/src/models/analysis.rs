use serde::{Deserialize, Serialize};

/// Risk classification reported in the analysis envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Fixed-shape envelope returned by `/analyze`.
///
/// `ai_output` carries the model text verbatim; the remaining fields are
/// constants of the current analysis logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub risk_level: RiskLevel,
    pub short_summary: String,
    pub ai_output: String,
    pub note: String,
}
