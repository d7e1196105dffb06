mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod media_config;
mod server_config;
mod session_config;
mod validation_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use media_config::MediaConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".acct";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MEDIA_DIRECTORY: &str = "media";

/// Everything on disk stays inside the config dir
fn is_contained(path: &str) -> bool {
    !std::path::Path::new(path).is_absolute() && !path.contains("..")
}

#[cfg(test)]
mod tests;
