use thiserror::Error;

#[derive(Debug, Error)]
pub enum VtoError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, VtoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VtoError::Generation("no image in response".into());
        assert_eq!(err.to_string(), "Generation failed: no image in response");

        let err = VtoError::Validation("taille_cm must be between 100 and 250".into());
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
