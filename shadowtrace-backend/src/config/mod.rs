use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Environment variable holding the Gemini credential.
///
/// The variable may be absent: the service still starts, and `/analyze`
/// reports the missing credential at request time.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default text model when GEMINI_MODEL is not set.
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl BackendConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(BackendConfig {
            common: common_config,
            models: ModelConfig {
                text_model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            },
            google: GoogleConfig {
                api_key: env::var(GEMINI_API_KEY_VAR).unwrap_or_default(),
            },
        })
    }
}
