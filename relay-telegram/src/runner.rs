//! Dispatcher runner: converts teloxide messages and button presses to core events and passes them to the HandlerChain.
//! This is the top-level error boundary: a failed chain (e.g. a relay delivery error) is logged and the bot keeps polling.

use anyhow::Result;
use relay_core::{HandlerChain, Message, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Polls Telegram until Ctrl-C, routing text messages and callback queries through `handler_chain`.
/// Calls get_me() first and writes the bot's username into `bot_username` so handlers can tell
/// `/command@this_bot` from commands addressed to other bots.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => match &me.user.username {
            Some(username) => {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
            None => warn!("Bot has no username; accepting any @mention on commands"),
        },
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.from.is_none() {
        info!(chat_id = msg.chat.id.0, "Skipping message without sender");
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    match msg.text() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_content = %text,
            "Received message"
        ),
        None => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message"
        ),
    }
    dispatch(&chain, &core_msg).await;
    Ok(())
}

async fn on_callback_query(
    bot: teloxide::Bot,
    query: teloxide::types::CallbackQuery,
    chain: HandlerChain,
) -> ResponseResult<()> {
    // Stops the client-side loading indicator on the pressed button.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, user_id = query.from.id.0, "answer_callback_query failed");
    }
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        data = %core_msg.content,
        "Received button press"
    );
    dispatch(&chain, &core_msg).await;
    Ok(())
}

async fn dispatch(chain: &HandlerChain, core_msg: &Message) {
    if let Err(e) = chain.handle(core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
}
