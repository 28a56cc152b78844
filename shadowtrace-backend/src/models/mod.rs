pub mod analysis;

pub use analysis::{AnalysisReport, RiskLevel};
