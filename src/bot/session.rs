use async_trait::async_trait;
use parking_lot::Mutex;

use super::{
    classifier::classify,
    commands::CommandHandlers,
    config::BotIdentity,
    handler::BotError,
    processor::{dispatch, welcome_message, OutboundMessage, Outcome},
    state::SessionState,
};

/* Session is the long-lived bot.
 * It owns the one SessionState and serializes access to it, so updates
 * arriving from several chats at once never mutate it concurrently.
 * The lock is only held while classifying and dispatching, never across a send.
 */

// Outbound side of the chat platform. Text already carries any mention.
#[async_trait]
pub trait Transport {
    async fn send(&self, text: String, channel: &str) -> Result<(), BotError>;
}

pub struct BotSession<H> {
    identity: BotIdentity,
    handlers: H,
    state: Mutex<SessionState>,
}

impl<H: CommandHandlers> BotSession<H> {
    pub fn new(identity: BotIdentity, handlers: H) -> BotSession<H> {
        BotSession {
            identity,
            handlers,
            state: Mutex::new(SessionState::new()),
        }
    }

    pub fn praise_count(&self) -> u64 {
        self.state.lock().praise_count
    }

    /* Onboarding message for a new member, posted in the general channel.
     * None if no general channel is configured.
     */
    pub fn welcome(&self, user_id: &str) -> Option<OutboundMessage> {
        match self.identity.general_channel() {
            Some(general) => Some(OutboundMessage::to_user(
                user_id,
                general,
                welcome_message(&self.identity),
            )),
            None => {
                log::warn!(
                    "No general channel configured, not welcoming user {}",
                    user_id
                );
                None
            }
        }
    }

    /* Classifies and dispatches one message.
     * Messages without text are ignored.
     */
    pub fn bend(&self, text: Option<&str>, user: &str, channel: &str) -> Option<OutboundMessage> {
        let text = text?;
        let intent = classify(text.trim(), &self.identity);

        let outcome = {
            let mut state = self.state.lock();
            dispatch(
                intent,
                user,
                channel,
                &mut state,
                &self.identity,
                &self.handlers,
            )
        };

        match outcome {
            Outcome::Reply(outbound) => Some(outbound),
            Outcome::Deferred { command } => {
                log::debug!("{} accepted without a reply", command);
                None
            }
            Outcome::Silent => None,
        }
    }

    pub async fn welcome_user<T: Transport + ?Sized>(
        &self,
        transport: &T,
        user_id: &str,
    ) -> Result<(), BotError> {
        match self.welcome(user_id) {
            Some(outbound) => self.deliver(transport, outbound).await,
            None => Ok(()),
        }
    }

    pub async fn handle_message<T: Transport + ?Sized>(
        &self,
        transport: &T,
        text: Option<&str>,
        user: &str,
        channel: &str,
    ) -> Result<(), BotError> {
        match self.bend(text, user, channel) {
            Some(outbound) => self.deliver(transport, outbound).await,
            None => Ok(()),
        }
    }

    async fn deliver<T: Transport + ?Sized>(
        &self,
        transport: &T,
        outbound: OutboundMessage,
    ) -> Result<(), BotError> {
        let text = outbound.render(&self.identity);
        transport.send(text, &outbound.channel).await
    }
}
