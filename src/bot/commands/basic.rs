use crate::bot::state::Account;

use super::{
    BetOptions, CheckBuxOptions, CommandHandlers, CommandResult, HelpOptions, JoinOptions,
};

/* BasicCommands is the handler set the bot ships with.
 * It covers what needs no dice and no economy rules: help text,
 * opening bank accounts and reading balances.
 * Games reply that they are not wired up; plug real ones in by
 * implementing CommandHandlers.
 */

const STARTING_BUX: i64 = 0;

#[derive(Default)]
pub struct BasicCommands;

impl BasicCommands {
    pub fn new() -> BasicCommands {
        BasicCommands
    }

    fn not_wired(&self, command: &str) -> CommandResult {
        CommandResult::new(format!(
            "{command} isn't wired up on this deployment. Sorry meatbag."
        ))
    }
}

/* Utilities */

// Per-command usage lines for HELP <command>.
fn command_usage(command: &str, bot: &str) -> Option<String> {
    let usage = match command {
        "ROLL" => format!("{bot} ROLL <times>d<sides> rolls dice, e.g. 2d6 or d20. {bot} ROLL CHARACTER rolls up a character."),
        "JOIN" => format!("{bot} JOIN opens your bank account."),
        "CHECKBUX" => format!("{bot} CHECKBUX [user] shows a bank balance, yours by default."),
        "HELP" => format!("{bot} HELP <command> [game] explains a command."),
        "BET" => format!("{bot} BET <amount> <game> [options...] bets bux on a game."),
        "COMMANDS" => format!("{bot} COMMANDS lists every command."),
        "COIN" => format!("{bot} COIN flips a coin."),
        "8BALL" => format!("{bot} 8BALL answers your question."),
        "FORTUNE" => format!("{bot} FORTUNE tells your fortune."),
        "PICKIT" => format!("{bot} PICKIT <option> \"another option\" ... picks one for you."),
        "PRAISE" => format!("{bot} PRAISE praises me."),
        _ => return None,
    };
    Some(usage)
}

fn game_usage(game: &str, bot: &str) -> Option<String> {
    let usage = match game {
        "COIN" => format!("{bot} BET <amount> COIN <HEADS|TAILS>"),
        "ROLL" => format!("{bot} BET <amount> ROLL <times>d<sides> <guess>"),
        _ => return None,
    };
    Some(usage)
}

impl CommandHandlers for BasicCommands {
    fn roll(&self, _die: &str, _times: &str) -> CommandResult {
        self.not_wired("ROLL")
    }

    fn join(&self, user: &str, _channel: &str, opts: JoinOptions<'_>) -> CommandResult {
        if opts.bank.contains_key(user) {
            return CommandResult::new("You already have an account.");
        }

        opts.bank.insert(user.to_string(), Account::open(STARTING_BUX));
        CommandResult::new(format!(
            "Account opened with {STARTING_BUX} bux. Welcome to the bank."
        ))
    }

    fn check_bux(&self, user: &str, opts: CheckBuxOptions<'_>) -> CommandResult {
        let mention_style = opts.mention_style;
        let target = opts
            .target
            .map(|t| mention_style.resolve(t))
            .unwrap_or(user);

        match opts.bank.get(target) {
            Some(account) if target == user => {
                CommandResult::new(format!("You have {} bux.", account.balance))
            }
            Some(account) => CommandResult::new(format!(
                "{} has {} bux.",
                mention_style.mention(target),
                account.balance
            )),
            None if target == user => {
                CommandResult::new("You don't have an account. JOIN first.")
            }
            None => CommandResult::new(format!(
                "{} doesn't have an account.",
                mention_style.mention(target)
            )),
        }
    }

    fn help(
        &self,
        command: Option<&str>,
        sub_command: Option<&str>,
        opts: HelpOptions<'_>,
    ) -> CommandResult {
        let bot = opts.mention_style.mention(opts.bot_id);

        let command = match command {
            Some(command) => command.to_uppercase(),
            None => {
                return CommandResult::new(format!(
                    "Use {bot} HELP <command-name> for details. Commands: {}",
                    opts.commands.join(", ")
                ))
            }
        };

        if !opts.commands.contains(&command) {
            return CommandResult::new(format!(
                "{command} isn't a command. Try {bot} COMMANDS."
            ));
        }

        if command == "BET" {
            if let Some(game) = sub_command.map(|g| g.to_uppercase()) {
                if !opts.games.contains(&game) {
                    return CommandResult::new(format!(
                        "{game} isn't a game. Games: {}",
                        opts.games.join(", ")
                    ));
                }
                if let Some(usage) = game_usage(&game, &bot) {
                    return CommandResult::new(usage);
                }
            }
        }

        match command_usage(&command, &bot) {
            Some(usage) => CommandResult::new(usage),
            None => CommandResult::new(format!("No help for {command} yet.")),
        }
    }

    fn bet(&self, _user: &str, _channel: &str, _opts: BetOptions<'_>) -> CommandResult {
        self.not_wired("BET")
    }

    fn coin(&self) -> CommandResult {
        self.not_wired("COIN")
    }

    fn eight_ball(&self) -> CommandResult {
        self.not_wired("8BALL")
    }

    fn fortune(&self) -> CommandResult {
        self.not_wired("FORTUNE")
    }

    fn pickit(&self, _ops: &[String]) -> CommandResult {
        self.not_wired("PICKIT")
    }

    fn character(&self) -> CommandResult {
        self.not_wired("CHARACTER")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::bot::{
        config::{MentionStyle, COMMANDS, GAMES},
        state::Bank,
    };

    fn commands() -> Vec<String> {
        COMMANDS.iter().map(|c| c.to_string()).collect()
    }

    fn games() -> Vec<String> {
        GAMES.iter().map(|g| g.to_string()).collect()
    }

    fn help(command: Option<&str>, sub_command: Option<&str>) -> String {
        let handlers = BasicCommands::new();
        let channel_ids = HashMap::new();
        let commands = commands();
        let games = games();
        handlers
            .help(
                command,
                sub_command,
                HelpOptions {
                    commands: &commands,
                    games: &games,
                    channel_ids: &channel_ids,
                    bot_id: "U1",
                    mention_style: MentionStyle::Slack,
                },
            )
            .message
    }

    #[test]
    fn test_join_opens_account_once() {
        let handlers = BasicCommands::new();
        let channel_ids = HashMap::new();
        let mut bank = Bank::new();

        let first = handlers.join(
            "U2",
            "C1",
            JoinOptions {
                channel_ids: &channel_ids,
                bank: &mut bank,
            },
        );
        assert!(first.message.contains("opened"));
        assert_eq!(bank.get("U2").map(|a| a.balance), Some(STARTING_BUX));

        let second = handlers.join(
            "U2",
            "C1",
            JoinOptions {
                channel_ids: &channel_ids,
                bank: &mut bank,
            },
        );
        assert_eq!(second.message, "You already have an account.");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_check_bux() {
        let handlers = BasicCommands::new();
        let channel_ids = HashMap::new();
        let mut bank = Bank::new();
        bank.insert("U2".to_string(), Account::open(40));

        let mut check = |user: &str, target: Option<&str>| {
            handlers
                .check_bux(
                    user,
                    CheckBuxOptions {
                        channel_ids: &channel_ids,
                        bank: &mut bank,
                        target,
                        mention_style: MentionStyle::Slack,
                    },
                )
                .message
        };

        assert_eq!(check("U2", None), "You have 40 bux.");
        assert_eq!(check("U3", Some("<@U2>")), "<@U2> has 40 bux.");
        assert_eq!(check("U3", None), "You don't have an account. JOIN first.");
        assert_eq!(check("U2", Some("<@U4>")), "<@U4> doesn't have an account.");
    }

    #[test]
    fn test_help_overview() {
        let message = help(None, None);
        assert!(message.starts_with("Use <@U1> HELP <command-name>"));
        assert!(message.contains("PICKIT"));
    }

    #[test]
    fn test_help_command() {
        assert!(help(Some("roll"), None).contains("<@U1> ROLL"));
        assert_eq!(
            help(Some("dance"), None),
            "DANCE isn't a command. Try <@U1> COMMANDS."
        );
    }

    #[test]
    fn test_help_bet_game() {
        assert_eq!(help(Some("BET"), Some("coin")), "<@U1> BET <amount> COIN <HEADS|TAILS>");
        assert!(help(Some("BET"), Some("poker")).starts_with("POKER isn't a game."));
        assert!(help(Some("BET"), None).contains("bets bux"));
    }

    #[test]
    fn test_games_not_wired() {
        let handlers = BasicCommands::new();
        assert_eq!(
            handlers.coin().message,
            "COIN isn't wired up on this deployment. Sorry meatbag."
        );
        assert!(handlers.roll("6", "2").message.starts_with("ROLL"));
    }
}
