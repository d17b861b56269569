use teloxide::{types::User, RequestError};

/* Common utilites for handlers. */

pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Request error: {0}")]
    RequestError(RequestError),
    #[error("Cannot send to channel: {0}")]
    InvalidChannel(String),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

// Ensures that a username has a leading '@'.
pub fn parse_username(username: &str) -> String {
    if username.starts_with('@') {
        username.to_string()
    } else {
        format!("@{}", username)
    }
}

// Identifies a user to the bot: their @username if they have one, else their numeric id.
pub fn user_handle(user: &User) -> String {
    match &user.username {
        Some(username) => parse_username(username),
        None => user.id.0.to_string(),
    }
}
