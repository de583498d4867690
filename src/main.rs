use vto::logger::{self, LogLevel, LoggerConfig};
use vto::server::{self, AppState};
use vto::{Config, GeminiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(LoggerConfig::development().with_level(LogLevel::Debug))?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();
    logger::log_startup_info("vto-api", env!("CARGO_PKG_VERSION"), config.port());
    logger::log_config_info(&config);

    let gemini = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    server::serve(AppState { config, gemini }).await?;
    Ok(())
}
