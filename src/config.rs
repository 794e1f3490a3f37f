//! Configuration and settings management
//!
//! Loads settings from environment variables and defines process-wide constants.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

/// Review API endpoint queried on every poll cycle.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Pause between poll cycles. Applied unconditionally, after successful
/// and failed cycles alike.
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram Bot API token
    pub telegram_token: String,

    /// Chat that receives all notifications
    pub telegram_chat_id: i64,
}

impl Settings {
    /// Create new settings by loading from the environment.
    ///
    /// All three values are mandatory; empty variables are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the missing field if any of the
    /// required variables is absent or empty.
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Environment::default() auto-converts UPPER_SNAKE_CASE to snake_case.
            // ignore_empty treats empty env vars as unset, try_parsing lets
            // telegram_chat_id come through as an integer.
            .add_source(Environment::default().ignore_empty(true).try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}
