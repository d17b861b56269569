use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::dispatcher::{Session, TelegramTransport};

use super::utils::{user_handle, HandlerResult};

/* Message action.
 * Every text message (new or edited) goes through the session.
 * Service messages and messages without text are left alone.
 */
pub async fn action_bend(bot: Bot, msg: Message, session: Arc<Session>) -> HandlerResult {
    let user = match msg.from() {
        Some(user) => user,
        None => return Ok(()),
    };

    let transport = TelegramTransport::new(bot);
    session
        .handle_message(
            &transport,
            msg.text(),
            &user_handle(user),
            &msg.chat.id.0.to_string(),
        )
        .await
}

/* Welcome action.
 * Invoked when members join a chat. Bots are not welcomed.
 * A failed welcome is logged and does not stop the others.
 */
pub async fn action_welcome(bot: Bot, msg: Message, session: Arc<Session>) -> HandlerResult {
    let members = match msg.new_chat_members() {
        Some(members) => members,
        None => return Ok(()),
    };

    let transport = TelegramTransport::new(bot);
    for member in members.iter().filter(|m| !m.is_bot) {
        let handle = user_handle(member);
        if let Err(err) = session.welcome_user(&transport, &handle).await {
            log::error!(
                "Welcome - Failed to welcome user {} in chat {}: {}",
                handle,
                msg.chat.id.0,
                err.to_string()
            );
        }
    }

    Ok(())
}
