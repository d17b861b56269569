use super::{
    classifier::Intent,
    commands::{BetOptions, CheckBuxOptions, CommandHandlers, GameData, HelpOptions, JoinOptions},
    config::BotIdentity,
    state::SessionState,
};

/* Processor is the logic center of the bot.
 * It takes one classified Intent at a time, runs it against the session
 * state and the command handlers, and says what to send back.
 * It never talks to the chat platform itself.
 */

const GREETING_MESSAGE: &str = "I'm a Bender. I bend girders. :partyparrot:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel: String,
    // User to mention in front of the text. None for channel-wide replies.
    pub mention: Option<String>,
    pub text: String,
}

impl OutboundMessage {
    pub fn to_user(user: &str, channel: &str, text: impl Into<String>) -> OutboundMessage {
        OutboundMessage {
            channel: channel.to_string(),
            mention: Some(user.to_string()),
            text: text.into(),
        }
    }

    pub fn to_channel(channel: &str, text: impl Into<String>) -> OutboundMessage {
        OutboundMessage {
            channel: channel.to_string(),
            mention: None,
            text: text.into(),
        }
    }

    // Final text for the transport, with the user mention prefixed.
    pub fn render(&self, identity: &BotIdentity) -> String {
        match &self.mention {
            Some(user) => format!("{} {}", identity.mention(user), self.text),
            None => self.text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(OutboundMessage),
    // Accepted, but the command has no handler yet
    Deferred { command: &'static str },
    Silent,
}

/* Utilities */

pub fn welcome_message(identity: &BotIdentity) -> String {
    format!(
        "Welcome to the chat! :congaparrot:\nType {} COMMANDS to get a list of bot commands!\nEnjoy! :bender:",
        identity.mention(&identity.bot_id)
    )
}

fn list_commands_message(identity: &BotIdentity) -> String {
    format!(
        "The current supported commands are: {}\nUse {} HELP <command-name> for details",
        identity.command_names.join(", "),
        identity.mention(&identity.bot_id)
    )
}

fn praise_message(count: u64) -> String {
    format!("Bender has been praised {count} times since last restart")
}

/* Main function of the Processor.
 * Every Intent is matched explicitly, so a new command cannot be left unhandled.
 * Handler results are relayed as they are.
 */
#[deny(clippy::wildcard_enum_match_arm)]
pub fn dispatch<H: CommandHandlers + ?Sized>(
    intent: Intent,
    user: &str,
    channel: &str,
    state: &mut SessionState,
    identity: &BotIdentity,
    handlers: &H,
) -> Outcome {
    let reply = |text: String| Outcome::Reply(OutboundMessage::to_user(user, channel, text));

    match intent {
        Intent::Greet => reply(GREETING_MESSAGE.to_string()),
        Intent::Roll { die, times } => reply(handlers.roll(&die, &times).message),
        Intent::RollCharacter | Intent::Character => reply(handlers.character().message),
        Intent::Join => {
            let opts = JoinOptions {
                channel_ids: &identity.channel_ids,
                bank: &mut state.bank,
            };
            reply(handlers.join(user, channel, opts).message)
        }
        Intent::CheckBux { target } => {
            let opts = CheckBuxOptions {
                channel_ids: &identity.channel_ids,
                bank: &mut state.bank,
                target: target.as_deref(),
                mention_style: identity.mention_style,
            };
            reply(handlers.check_bux(user, opts).message)
        }
        Intent::Help {
            command,
            sub_command,
        } => {
            let opts = HelpOptions {
                commands: &identity.command_names,
                games: &identity.game_names,
                channel_ids: &identity.channel_ids,
                bot_id: &identity.bot_id,
                mention_style: identity.mention_style,
            };
            reply(
                handlers
                    .help(command.as_deref(), sub_command.as_deref(), opts)
                    .message,
            )
        }
        Intent::Bet { amount, game, ops } => {
            let game_data = GameData { amount, game, ops };
            let opts = BetOptions {
                channel_ids: &identity.channel_ids,
                game_data: &game_data,
                bank: &mut state.bank,
                games: &identity.game_names,
            };
            reply(handlers.bet(user, channel, opts).message)
        }
        Intent::ListCommands => reply(list_commands_message(identity)),
        Intent::Coin => reply(handlers.coin().message),
        Intent::EightBall => reply(handlers.eight_ball().message),
        Intent::Fortune => reply(handlers.fortune().message),
        Intent::Heist => {
            log::info!(
                "Heist requested by user {} in channel {}, heists are not running yet",
                user,
                channel
            );
            Outcome::Deferred { command: "HEIST" }
        }
        Intent::Pickit { ops } => reply(handlers.pickit(&ops).message),
        Intent::Praise => {
            // Counted before the message exists, so a failed send still counts
            let count = state.praise();
            Outcome::Reply(OutboundMessage::to_channel(channel, praise_message(count)))
        }
        Intent::Welcome => reply(welcome_message(identity)),
        Intent::UnrecognizedMention { message } => match message {
            Some(message) => reply(message),
            None => Outcome::Silent,
        },
        Intent::Ignored => Outcome::Silent,
    }
}
