pub mod image_client;

use crate::{config::GeminiConfig, error::Result};

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    /// Build a client from an explicit configuration. The API key is checked
    /// here so a missing credential fails at startup, not at first request.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let model_id = config.model_id().to_string();
        let http = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(http, api_key, model_id),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_fails_construction() {
        let result = GeminiClient::new(GeminiConfig::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_configured_client_builds() {
        let config = GeminiConfig::new().with_api_key("test-key");
        assert!(GeminiClient::new(config).is_ok());
    }
}
