use std::collections::BTreeMap;

use super::{
    config::BotIdentity,
    tokenizer::{is_dice_notation, meme_safe_split, quote_safe_split},
};

/* Classifier decides what a message is asking the bot to do.
 * It never fails: anything it does not understand is Ignored,
 * or UnrecognizedMention if the bot was addressed.
 * Arguments are extracted as-is; handlers validate them.
 */

const TOKEN_DELIMITER: &str = " ";
const BOT_ALIASES: [&str; 2] = [":B:", ":BENDER:"];
const BOT_NAME: &str = "BENDER";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Greet,
    Roll {
        die: String,
        times: String,
    },
    RollCharacter,
    Join,
    CheckBux {
        target: Option<String>,
    },
    Help {
        command: Option<String>,
        sub_command: Option<String>,
    },
    Bet {
        amount: Option<String>,
        game: Option<String>,
        ops: BTreeMap<String, String>,
    },
    ListCommands,
    Coin,
    EightBall,
    Fortune,
    Heist,
    Praise,
    // Handled like RollCharacter; classify never produces it
    Character,
    Pickit {
        ops: Vec<String>,
    },
    Welcome,
    UnrecognizedMention {
        message: Option<String>,
    },
    Ignored,
}

/* Utilities */

// Checks if a token addresses the bot, by id (case-sensitive) or alias.
fn is_bot_token(token: &str, identity: &BotIdentity) -> bool {
    token.contains(identity.bot_id.as_str()) || BOT_ALIASES.contains(&token.to_uppercase().as_str())
}

// "HI BENDER" also accepts the bot's plain name.
fn is_greeting_target(token: &str, identity: &BotIdentity) -> bool {
    token.to_uppercase() == BOT_NAME || is_bot_token(token, identity)
}

fn classify_roll(die_token: &str) -> Intent {
    let upper = die_token.to_uppercase();
    if upper == "CHARACTER" || upper == "DRAGON" {
        return Intent::RollCharacter;
    }

    if is_dice_notation(&upper) {
        let (times, die) = meme_safe_split(&upper, 'D');
        let times = if times.is_empty() {
            "1".to_string()
        } else {
            times
        };
        Intent::Roll { die, times }
    } else {
        // Not dice notation, let the handler decide what the die is
        Intent::Roll {
            die: die_token.to_string(),
            times: "1".to_string(),
        }
    }
}

fn classify_bet(tokens: &[&str]) -> Intent {
    let ops = tokens
        .iter()
        .enumerate()
        .skip(4)
        .map(|(index, op)| (format!("op{}", index - 3), op.to_string()))
        .collect();

    Intent::Bet {
        amount: tokens.get(2).map(|t| t.to_string()),
        game: tokens.get(3).map(|t| t.to_string()),
        ops,
    }
}

fn classify_pickit(tokens: &[&str]) -> Intent {
    let rest = tokens.get(2..).unwrap_or_default().join(TOKEN_DELIMITER);
    Intent::Pickit {
        ops: quote_safe_split(&rest, TOKEN_DELIMITER),
    }
}

// Classifies the command word following a mention.
fn classify_mention(tokens: &[&str]) -> Intent {
    log::debug!("Mention detected, checking for command..");

    let arg = |index: usize| tokens.get(index).map(|t| t.to_string());
    let keyword = tokens[1].to_uppercase();

    match keyword.as_str() {
        "ROLL" | ":GAME_DIE:" if tokens.len() > 2 => {
            log::debug!("Processing ROLL command...");
            classify_roll(tokens[2])
        }
        "JOIN" => Intent::Join,
        "CHECKBUX" => Intent::CheckBux { target: arg(2) },
        "HELP" => Intent::Help {
            command: arg(2),
            sub_command: arg(3),
        },
        "BET" => classify_bet(tokens),
        "COMMANDS" => Intent::ListCommands,
        "COIN" => Intent::Coin,
        "8BALL" | ":8BALL:" => Intent::EightBall,
        "FORTUNE" | ":FORTUNE:" => Intent::Fortune,
        "HEIST" => Intent::Heist,
        "PICKIT" => classify_pickit(tokens),
        "PRAISE" | ":PRAY:" => Intent::Praise,
        _ => {
            log::debug!("No command found");
            Intent::UnrecognizedMention { message: None }
        }
    }
}

/* Main function of the Classifier.
 * Takes the raw message text and returns what it asks for.
 * Tokens come from a naive split on single spaces.
 */
pub fn classify(raw_text: &str, identity: &BotIdentity) -> Intent {
    let tokens: Vec<&str> = raw_text.trim().split(TOKEN_DELIMITER).collect();
    let first = tokens[0].to_uppercase();

    // Legacy greeting
    if first == "HI" && tokens.len() > 1 {
        if is_greeting_target(tokens[1], identity) {
            return Intent::Greet;
        }
        return Intent::Ignored;
    }

    if first == "WELCOME" && tokens.len() == 1 {
        return Intent::Welcome;
    }

    if is_bot_token(tokens[0], identity) && tokens.len() > 1 {
        return classify_mention(&tokens);
    }

    Intent::Ignored
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::bot::config::MentionStyle;

    fn identity() -> BotIdentity {
        BotIdentity::new("U1", HashMap::new())
            .unwrap()
            .with_mention_style(MentionStyle::Slack)
    }

    fn roll(times: &str, die: &str) -> Intent {
        Intent::Roll {
            die: die.to_string(),
            times: times.to_string(),
        }
    }

    #[test]
    fn test_roll_dice_notation() {
        assert_eq!(classify("<@U1> ROLL 2d6", &identity()), roll("2", "6"));
        assert_eq!(classify("<@U1> ROLL d20", &identity()), roll("1", "20"));
        assert_eq!(classify("<@U1> :game_die: 3D8", &identity()), roll("3", "8"));
    }

    #[test]
    fn test_roll_emoji_die() {
        assert_eq!(
            classify("<@U1> roll 2d:d20:", &identity()),
            roll("2", ":D20:")
        );
        assert_eq!(
            classify("<@U1> roll d:d20:", &identity()),
            roll("1", ":D20:")
        );
    }

    #[test]
    fn test_roll_non_dice_token_passes_through() {
        assert_eq!(classify("<@U1> ROLL :d20:", &identity()), roll("1", ":d20:"));
        assert_eq!(classify("<@U1> ROLL banana", &identity()), roll("1", "banana"));
    }

    #[test]
    fn test_roll_character() {
        assert_eq!(
            classify("<@U1> ROLL CHARACTER", &identity()),
            Intent::RollCharacter
        );
        assert_eq!(
            classify("<@U1> roll dragon", &identity()),
            Intent::RollCharacter
        );
    }

    #[test]
    fn test_bare_character_is_unrecognized() {
        assert_eq!(
            classify("<@U1> CHARACTER", &identity()),
            Intent::UnrecognizedMention { message: None }
        );
        assert_eq!(
            classify("<@U1> dragon", &identity()),
            Intent::UnrecognizedMention { message: None }
        );
    }

    #[test]
    fn test_roll_without_die_is_unrecognized() {
        assert_eq!(
            classify("<@U1> ROLL", &identity()),
            Intent::UnrecognizedMention { message: None }
        );
    }

    #[test]
    fn test_pickit_quoted_options() {
        assert_eq!(
            classify("<@U1> PICKIT lock \"master key\"", &identity()),
            Intent::Pickit {
                ops: vec!["lock".to_string(), "master key".to_string()]
            }
        );
    }

    #[test]
    fn test_pickit_without_options() {
        assert_eq!(
            classify("<@U1> PICKIT", &identity()),
            Intent::Pickit {
                ops: vec!["".to_string()]
            }
        );
    }

    #[test]
    fn test_bet() {
        let mut ops = BTreeMap::new();
        ops.insert("op1".to_string(), "heads".to_string());
        assert_eq!(
            classify("<@U1> BET 50 COIN heads", &identity()),
            Intent::Bet {
                amount: Some("50".to_string()),
                game: Some("COIN".to_string()),
                ops,
            }
        );
    }

    #[test]
    fn test_bet_missing_arguments_passed_through() {
        assert_eq!(
            classify("<@U1> BET", &identity()),
            Intent::Bet {
                amount: None,
                game: None,
                ops: BTreeMap::new(),
            }
        );
    }

    #[test]
    fn test_bet_numbers_ops_from_one() {
        match classify("<@U1> bet 5 ROLL 2d6 7 9", &identity()) {
            Intent::Bet { ops, .. } => {
                assert_eq!(ops.get("op1").map(String::as_str), Some("2d6"));
                assert_eq!(ops.get("op2").map(String::as_str), Some("7"));
                assert_eq!(ops.get("op3").map(String::as_str), Some("9"));
                assert_eq!(ops.len(), 3);
            }
            other => panic!("expected Bet, got {:?}", other),
        }
    }

    #[test]
    fn test_help_and_checkbux_arguments() {
        assert_eq!(
            classify("<@U1> HELP BET COIN", &identity()),
            Intent::Help {
                command: Some("BET".to_string()),
                sub_command: Some("COIN".to_string()),
            }
        );
        assert_eq!(
            classify("<@U1> help", &identity()),
            Intent::Help {
                command: None,
                sub_command: None,
            }
        );
        assert_eq!(
            classify("<@U1> CHECKBUX <@U2>", &identity()),
            Intent::CheckBux {
                target: Some("<@U2>".to_string())
            }
        );
        assert_eq!(
            classify("<@U1> checkbux", &identity()),
            Intent::CheckBux { target: None }
        );
    }

    #[test]
    fn test_simple_commands() {
        let cases = [
            ("JOIN", Intent::Join),
            ("commands", Intent::ListCommands),
            ("Coin", Intent::Coin),
            ("8ball", Intent::EightBall),
            (":8ball:", Intent::EightBall),
            ("fortune", Intent::Fortune),
            (":FORTUNE:", Intent::Fortune),
            ("heist", Intent::Heist),
            ("praise", Intent::Praise),
            (":pray:", Intent::Praise),
        ];
        for (keyword, expected) in cases {
            assert_eq!(
                classify(&format!("<@U1> {keyword}"), &identity()),
                expected,
                "keyword {keyword}"
            );
        }
    }

    #[test]
    fn test_aliases_are_mentions() {
        assert_eq!(classify(":b: coin", &identity()), Intent::Coin);
        assert_eq!(classify(":Bender: coin", &identity()), Intent::Coin);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            classify("<@U1> dance", &identity()),
            Intent::UnrecognizedMention { message: None }
        );
    }

    #[test]
    fn test_mention_alone_is_ignored() {
        assert_eq!(classify("<@U1>", &identity()), Intent::Ignored);
        assert_eq!(classify("  <@U1>  ", &identity()), Intent::Ignored);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(classify("hi bender", &identity()), Intent::Greet);
        assert_eq!(classify("HI <@U1>", &identity()), Intent::Greet);
        assert_eq!(classify("Hi :B:", &identity()), Intent::Greet);
        assert_eq!(classify("hi :bender: roll 2d6", &identity()), Intent::Greet);
        assert_eq!(classify("hi there", &identity()), Intent::Ignored);
        assert_eq!(classify("hi", &identity()), Intent::Ignored);
    }

    #[test]
    fn test_welcome() {
        assert_eq!(classify("WELCOME", &identity()), Intent::Welcome);
        assert_eq!(classify("  welcome ", &identity()), Intent::Welcome);
        assert_eq!(classify("welcome everyone", &identity()), Intent::Ignored);
    }

    #[test]
    fn test_non_mentions_are_ignored() {
        for text in ["", "roll 2d6", "hello <@U1> coin", "COIN", "bender coin"] {
            assert_eq!(classify(text, &identity()), Intent::Ignored, "text {text:?}");
        }
    }

    #[test]
    fn test_bot_id_match_is_case_sensitive() {
        assert_eq!(classify("<@U1> COIN", &identity()), Intent::Coin);
        assert_eq!(classify("<@u1> COIN", &identity()), Intent::Ignored);
        // Substring match: the id may be wrapped in anything
        assert_eq!(classify("xxU1xx COIN", &identity()), Intent::Coin);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(classify("<@U1> rOlL 2D6", &identity()), roll("2", "6"));
        assert_eq!(classify("<@U1> PrAiSe", &identity()), Intent::Praise);
    }

    #[test]
    fn test_classify_is_pure() {
        let identity = identity();
        let text = "<@U1> BET 10 ROLL 2d6";
        assert_eq!(classify(text, &identity), classify(text, &identity));
    }
}
