use std::env;

use crate::error::{Result, VtoError};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model_id: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model_id: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GENAI_API_KEY").ok();
        let model_id = env::var("GEMINI_MODEL").ok();

        GeminiConfig { api_key, model_id }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().map_or(false, |key| !key.is_empty())
    }

    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(VtoError::Config("GENAI_API_KEY is not set".into())),
        }
    }

    pub fn model_id(&self) -> &str {
        self.model_id.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub gemini: GeminiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            gemini: GeminiConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = Config::new();
        assert_eq!(config.port(), DEFAULT_PORT);
        assert_eq!(config.with_port(3000).port(), 3000);
    }

    #[test]
    fn test_gemini_config() {
        let config = GeminiConfig::new();
        assert!(!config.is_configured());
        assert!(config.require_api_key().is_err());
        assert_eq!(config.model_id(), DEFAULT_GEMINI_MODEL);

        let config = GeminiConfig::new()
            .with_api_key("test-key")
            .with_model("gemini-3-pro-image");
        assert!(config.is_configured());
        assert_eq!(config.require_api_key().unwrap(), "test-key");
        assert_eq!(config.model_id(), "gemini-3-pro-image");
    }

    #[test]
    fn test_empty_api_key_is_not_configured() {
        let config = GeminiConfig::new().with_api_key("");
        assert!(!config.is_configured());
        assert!(config.require_api_key().is_err());
    }
}
