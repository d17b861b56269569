use std::{collections::HashMap, env};

use serde::Deserialize;

/* Config holds everything the bot reads once at startup.
 * Values come from the environment (optionally via a .env file).
 * BotIdentity is the read-only view of it that the core works with.
 */

pub const COMMANDS: [&str; 11] = [
    "ROLL", "JOIN", "CHECKBUX", "HELP", "BET", "COMMANDS", "COIN", "8BALL", "FORTUNE", "PICKIT",
    "PRAISE",
];
pub const GAMES: [&str; 2] = ["COIN", "ROLL"];

pub const GENERAL_CHANNEL: &str = "general";

const ENV_BOT_ID: &str = "BENDER_BOT_ID";
const ENV_CHANNELS: &str = "BENDER_CHANNELS";
const ENV_MENTION_STYLE: &str = "BENDER_MENTION_STYLE";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Bot id must not be empty")]
    EmptyBotId,
    #[error("Invalid channel map in BENDER_CHANNELS: {0}")]
    InvalidChannels(serde_json::Error),
    #[error("Unknown mention style: {0}")]
    UnknownMentionStyle(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(json_error: serde_json::Error) -> ConfigError {
        ConfigError::InvalidChannels(json_error)
    }
}

// How a user is mentioned in outbound text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MentionStyle {
    // <@U123>
    Slack,
    // The user id is already a handle, like @alice
    #[default]
    Plain,
}

impl MentionStyle {
    // Renders a mention of a user.
    pub fn mention(self, user: &str) -> String {
        match self {
            MentionStyle::Slack => format!("<@{user}>"),
            MentionStyle::Plain => user.to_string(),
        }
    }

    // Reverses mention(). Tokens that are not a mention come back as they are.
    pub fn resolve(self, token: &str) -> &str {
        match self {
            MentionStyle::Slack => token
                .strip_prefix("<@")
                .and_then(|t| t.strip_suffix('>'))
                .map(|t| t.split('|').next().unwrap_or(t))
                .unwrap_or(token),
            MentionStyle::Plain => token,
        }
    }
}

impl std::str::FromStr for MentionStyle {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, <Self as std::str::FromStr>::Err> {
        match s.to_lowercase().as_str() {
            "slack" => Ok(MentionStyle::Slack),
            "plain" => Ok(MentionStyle::Plain),
            _ => Err(ConfigError::UnknownMentionStyle(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub bot_id: Option<String>,
    pub channel_ids: HashMap<String, String>,
    pub mention_style: MentionStyle,
}

impl Config {
    /* Reads the config from environment variables.
     * Missing variables fall back to defaults; malformed ones are errors.
     */
    pub fn from_env() -> Result<Config, ConfigError> {
        let bot_id = env::var(ENV_BOT_ID).ok().filter(|id| !id.trim().is_empty());

        let channel_ids = match env::var(ENV_CHANNELS) {
            Ok(raw) => parse_channels(&raw)?,
            Err(_) => HashMap::new(),
        };

        let mention_style = match env::var(ENV_MENTION_STYLE) {
            Ok(raw) => raw.parse()?,
            Err(_) => MentionStyle::default(),
        };

        Ok(Config {
            bot_id,
            channel_ids,
            mention_style,
        })
    }

    /* Builds the bot identity.
     * The configured bot id wins over the one the platform reports.
     */
    pub fn identity(self, reported_bot_id: &str) -> Result<BotIdentity, ConfigError> {
        let bot_id = self.bot_id.unwrap_or_else(|| reported_bot_id.to_string());
        let mut identity = BotIdentity::new(&bot_id, self.channel_ids)?;
        identity.mention_style = self.mention_style;
        Ok(identity)
    }
}

// Telegram chat ids are numbers, other platforms use strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChannelId {
    Text(String),
    Number(i64),
}

// Parses a JSON object of channel names to channel ids.
fn parse_channels(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let channels: HashMap<String, ChannelId> = serde_json::from_str(raw)?;
    Ok(channels
        .into_iter()
        .map(|(name, id)| match id {
            ChannelId::Text(id) => (name, id),
            ChannelId::Number(id) => (name, id.to_string()),
        })
        .collect())
}

#[derive(Clone, Debug, PartialEq)]
pub struct BotIdentity {
    pub bot_id: String,
    pub channel_ids: HashMap<String, String>,
    pub command_names: Vec<String>,
    pub game_names: Vec<String>,
    pub mention_style: MentionStyle,
}

impl BotIdentity {
    pub fn new(
        bot_id: &str,
        channel_ids: HashMap<String, String>,
    ) -> Result<BotIdentity, ConfigError> {
        // An empty id is contained in every token, so everything would be a mention
        if bot_id.is_empty() {
            return Err(ConfigError::EmptyBotId);
        }

        Ok(BotIdentity {
            bot_id: bot_id.to_string(),
            channel_ids,
            command_names: COMMANDS.iter().map(|c| c.to_string()).collect(),
            game_names: GAMES.iter().map(|g| g.to_string()).collect(),
            mention_style: MentionStyle::default(),
        })
    }

    pub fn with_mention_style(mut self, mention_style: MentionStyle) -> BotIdentity {
        self.mention_style = mention_style;
        self
    }

    pub fn mention(&self, user: &str) -> String {
        self.mention_style.mention(user)
    }

    pub fn general_channel(&self) -> Option<&str> {
        self.channel_ids.get(GENERAL_CHANNEL).map(|id| id.as_str())
    }
}
