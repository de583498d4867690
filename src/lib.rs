pub mod config;
pub mod error;
pub mod gemini;
pub mod imaging;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod server;
pub mod vto;

pub use config::{Config, GeminiConfig};
pub use error::{Result, VtoError};
pub use gemini::{GeminiClient, ImageClient};
pub use models::*;
