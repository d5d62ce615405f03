//! Shared configuration logic
//!
//! Handles loading of common environment variables.

use crate::error::ConfigError;
use crate::locale::CalendarLocale;
use std::env;

/// Common configuration used by the bot binary
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Telegram bot token
    pub bot_token: String,

    /// Language of calendar labels (default: ru)
    pub calendar_locale: CalendarLocale,
}

impl CoreConfig {
    /// Load common configuration from environment variables
    ///
    /// This will also initialize dotenv if it hasn't been done yet.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let calendar_locale = match env::var("CALENDAR_LOCALE") {
            Ok(value) => value.parse()?,
            Err(_) => CalendarLocale::default(),
        };

        Ok(Self {
            bot_token: env::var("BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?,
            calendar_locale,
        })
    }
}
