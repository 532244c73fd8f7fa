//! Bot configuration: Telegram connection plus log file. Loaded from env (after `.env` via dotenvy).

use anyhow::Result;
use relay_telegram::TelegramConfig;
use std::env;

const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self { telegram, log_file })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
}
