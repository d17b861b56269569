use std::collections::HashMap;

/* Session state lives for as long as the process does.
 * There is exactly one per running bot, owned by the BotSession,
 * and handed by reference to whatever needs to read or change it.
 */

pub type Bank = HashMap<String, Account>;
pub type HeistRegistry = HashMap<String, HeistSession>;

// A user's bank record. Only command handlers read or write it.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub balance: i64,
}

impl Account {
    pub fn open(balance: i64) -> Account {
        Account { balance }
    }
}

// A heist in progress in a channel. Nothing starts one yet.
#[derive(Clone, Debug, PartialEq)]
pub struct HeistSession {
    pub crew: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub praise_count: u64,
    pub bank: Bank,
    pub heists: HeistRegistry,
}

impl SessionState {
    pub fn new() -> SessionState {
        SessionState::default()
    }

    // Counts one more praise and returns the new total.
    pub fn praise(&mut self) -> u64 {
        self.praise_count += 1;
        self.praise_count
    }
}
