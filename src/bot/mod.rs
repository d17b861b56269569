// bot/mod.rs

// Exported functions
pub use self::classifier::classify;
pub use self::dispatcher::run_dispatcher;
pub use self::processor::dispatch;
pub use self::tokenizer::{meme_safe_split, quote_safe_split};

// Exported structs and types
pub use self::classifier::Intent;
pub use self::commands::{BasicCommands, CommandHandlers, CommandResult};
pub use self::config::{BotIdentity, Config, ConfigError, MentionStyle};
pub use self::dispatcher::{Session, TelegramTransport};
pub use self::handler::BotError;
pub use self::processor::{OutboundMessage, Outcome};
pub use self::session::{BotSession, Transport};
pub use self::state::SessionState;

// Declare submodules
pub mod commands;
mod classifier;
mod config;
mod dispatcher;
mod handler;
mod processor;
mod session;
mod state;
mod tokenizer;
