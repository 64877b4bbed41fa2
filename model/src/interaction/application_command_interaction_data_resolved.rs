use crate::channel::Message;
use crate::user::User;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize, Serialize)]
pub struct ApplicationCommandInteractionDataResolved {
    #[serde(default = "HashMap::new")]
    pub users: HashMap<Snowflake, User>,
    #[serde(default = "HashMap::new")]
    pub messages: HashMap<Snowflake, Message>,
}

impl Default for ApplicationCommandInteractionDataResolved {
    fn default() -> Self {
        Self {
            users: HashMap::with_capacity(0),
            messages: HashMap::with_capacity(0),
        }
    }
}
