use serde::{Serialize, Deserialize};

use crate::Snowflake;
use crate::user::User;
use crate::channel::Reaction;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(default)]
    pub content: Box<str>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}
