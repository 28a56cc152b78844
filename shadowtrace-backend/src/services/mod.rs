pub mod analysis;
pub mod providers;

pub use analysis::{AnalysisEngine, AnalysisError};
