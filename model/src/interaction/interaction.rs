use crate::interaction::ApplicationCommandInteractionData;
use crate::Snowflake;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    // Component, autocomplete and modal interactions are never registered by us
    Unsupported(UnsupportedInteraction),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

// ============================================================================
// Ping Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct PingInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
}

// ============================================================================
// Application Command Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteraction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    pub data: ApplicationCommandInteractionData,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    #[serde(default)]
    pub token: Box<str>,
}

// ============================================================================
// Anything else
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct UnsupportedInteraction {
    pub r#type: u64,
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let raw_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| D::Error::custom("interaction type was not an integer"))?;

        let interaction = match InteractionType::try_from(raw_type) {
            Ok(InteractionType::Ping) => serde_json::from_value(value).map(Interaction::Ping),
            Ok(InteractionType::ApplicationCommand) => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            _ => Ok(Interaction::Unsupported(UnsupportedInteraction { r#type: raw_type })),
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}
