use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

use super::{
    commands::BasicCommands,
    handler::{action_bend, action_welcome, BotError},
    session::{BotSession, Transport},
};

/* Dispatcher wires Telegram updates to the bot session.
 * Joins are welcomed, messages and edits are bent.
 * Outbound messages go back through TelegramTransport.
 */

/* Types */
pub type Session = BotSession<BasicCommands>;

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> TelegramTransport {
        TelegramTransport { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send(&self, text: String, channel: &str) -> Result<(), BotError> {
        let chat_id: i64 = channel
            .parse()
            .map_err(|_| BotError::InvalidChannel(channel.to_string()))?;
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot, session: Arc<Session>) {
    let message_handler = Update::filter_message()
        .branch(
            dptree::filter(|msg: Message| msg.new_chat_members().is_some())
                .endpoint(action_welcome),
        )
        .branch(dptree::endpoint(action_bend));

    // Edits are handled like new messages
    let edited_message_handler = Update::filter_edited_message().endpoint(action_bend);

    let schema = dptree::entry()
        .branch(message_handler)
        .branch(edited_message_handler);

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![session])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
