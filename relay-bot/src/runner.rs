//! Assembly and startup: directory, handler chain, Telegram dispatcher.

use anyhow::Result;
use relay_core::{init_tracing, Bot, HandlerChain};
use relay_telegram::{run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::directory::Directory;
use crate::handlers::{LoggingHandler, RegistrationHandler, RelayHandler};

/// Builds the chain: logging, then registration of the sender, then command/button handling.
pub fn build_handler_chain(
    directory: Arc<Directory>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RegistrationHandler::new(directory.clone())))
        .add_handler(Arc::new(RelayHandler::new(directory, bot, bot_username)))
}

/// Main entry: validate config, init logging, build the chain with a fresh directory, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let directory = Arc::new(Directory::new());
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let handler_chain = build_handler_chain(directory, bot, bot_username.clone());

    info!(
        log_file = %config.log_file,
        api_url = %config.telegram_api_url().unwrap_or("default"),
        "Bot started"
    );

    run_dispatcher(teloxide_bot, handler_chain, bot_username).await
}
