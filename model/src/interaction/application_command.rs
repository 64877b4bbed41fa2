use crate::interaction::ApplicationCommandType;
use serde::{Deserialize, Serialize};

/// Payload used to register a global command with `PUT /applications/{id}/commands`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCommand {
    pub name: Box<str>,
    pub r#type: ApplicationCommandType,
    // Discord rejects a description on anything other than chat input commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
}

impl ApplicationCommand {
    pub fn chat_input(name: &str, description: &str) -> ApplicationCommand {
        ApplicationCommand {
            name: Box::from(name),
            r#type: ApplicationCommandType::ChatInput,
            description: Some(Box::from(description)),
        }
    }

    pub fn message(name: &str) -> ApplicationCommand {
        ApplicationCommand {
            name: Box::from(name),
            r#type: ApplicationCommandType::Message,
            description: None,
        }
    }
}
