use std::sync::Arc;

use bender::bot::{run_dispatcher, BasicCommands, BotSession, Config};
use teloxide::prelude::*;

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting Bender bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            return;
        }
    };

    let bot = teloxide::Bot::from_env();

    let me = match bot.get_me().await {
        Ok(me) => me,
        Err(err) => {
            log::error!("Failed to authenticate with Telegram: {}", err);
            return;
        }
    };
    log::info!("Name/ID: @{}", me.username());

    let identity = match config.identity(&format!("@{}", me.username())) {
        Ok(identity) => identity,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            return;
        }
    };
    for (name, id) in identity.channel_ids.iter() {
        log::info!("Member of channel: {} ({})", name, id);
    }

    let session = Arc::new(BotSession::new(identity, BasicCommands::new()));

    log::info!("Bender bot started successfully!");

    run_dispatcher(bot, session).await;
}
