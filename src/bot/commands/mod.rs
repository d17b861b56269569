use std::collections::{BTreeMap, HashMap};

use super::{config::MentionStyle, state::Bank};

// Exported structs and types
pub use self::basic::BasicCommands;

// Submodules
mod basic;

/* Commands are the game and economy handlers the bot relays to.
 * Each returns a CommandResult whose message is sent back verbatim.
 * Handlers own argument validation: a bad die or a missing bet amount
 * is reported through the message, never as an error.
 */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> CommandResult {
        CommandResult {
            message: message.into(),
        }
    }
}

// Bet arguments as typed, unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameData {
    pub amount: Option<String>,
    pub game: Option<String>,
    pub ops: BTreeMap<String, String>,
}

pub struct JoinOptions<'a> {
    pub channel_ids: &'a HashMap<String, String>,
    pub bank: &'a mut Bank,
}

pub struct CheckBuxOptions<'a> {
    pub channel_ids: &'a HashMap<String, String>,
    pub bank: &'a mut Bank,
    pub target: Option<&'a str>,
    pub mention_style: MentionStyle,
}

pub struct HelpOptions<'a> {
    pub commands: &'a [String],
    pub games: &'a [String],
    pub channel_ids: &'a HashMap<String, String>,
    pub bot_id: &'a str,
    pub mention_style: MentionStyle,
}

pub struct BetOptions<'a> {
    pub channel_ids: &'a HashMap<String, String>,
    pub game_data: &'a GameData,
    pub bank: &'a mut Bank,
    pub games: &'a [String],
}

pub trait CommandHandlers {
    fn roll(&self, die: &str, times: &str) -> CommandResult;
    fn join(&self, user: &str, channel: &str, opts: JoinOptions<'_>) -> CommandResult;
    fn check_bux(&self, user: &str, opts: CheckBuxOptions<'_>) -> CommandResult;
    fn help(
        &self,
        command: Option<&str>,
        sub_command: Option<&str>,
        opts: HelpOptions<'_>,
    ) -> CommandResult;
    fn bet(&self, user: &str, channel: &str, opts: BetOptions<'_>) -> CommandResult;
    fn coin(&self) -> CommandResult;
    fn eight_ball(&self) -> CommandResult;
    fn fortune(&self) -> CommandResult;
    fn pickit(&self, ops: &[String]) -> CommandResult;
    fn character(&self) -> CommandResult;
}
