use serde::{Serialize, Deserialize};
use crate::Snowflake;
use crate::interaction::{ApplicationCommandInteractionDataResolved, ApplicationCommandType};

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteractionData {
    pub id: Snowflake,
    pub name: Box<str>,
    pub r#type: ApplicationCommandType,
    // Only present for user and message context menu commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Snowflake>,
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
}
