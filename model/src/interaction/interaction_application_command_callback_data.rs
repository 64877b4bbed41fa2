use serde::{Serialize, Deserialize};

/// Only the invoking user can see the message.
pub const EPHEMERAL_FLAG: u32 = 1 << 6;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InteractionApplicationCommandCallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    pub content: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<PartialAttachment>>,
}

/// References a file uploaded as `files[{id}]` alongside the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PartialAttachment {
    pub id: usize,
    pub filename: Box<str>,
}

impl InteractionApplicationCommandCallbackData {
    pub fn ephemeral(content: &str) -> InteractionApplicationCommandCallbackData {
        InteractionApplicationCommandCallbackData {
            tts: None,
            content: Box::from(content),
            flags: Some(EPHEMERAL_FLAG),
            attachments: None,
        }
    }

    pub fn with_attachment(mut self, filename: &str) -> Self {
        let attachments = self.attachments.get_or_insert_with(Vec::new);
        attachments.push(PartialAttachment {
            id: attachments.len(),
            filename: Box::from(filename),
        });

        self
    }
}
