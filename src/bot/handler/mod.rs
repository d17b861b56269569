// Exported functions
pub use self::general::{action_bend, action_welcome};

// Exported structs and types
pub use self::utils::{BotError, HandlerResult};

// Submodules
mod general;
mod utils;
