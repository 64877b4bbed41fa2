use serde::{Serialize, Deserialize};
use crate::guild::Emoji;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Reaction {
    pub count: usize,
    #[serde(default)]
    pub me: bool,
    pub emoji: Emoji,
}
