use serde::{Deserialize, Serialize};

use crate::{util, Snowflake};

/// The emoji half of a reaction: either a unicode glyph (`id` is absent) or a custom emoji
/// uploaded to a guild.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(default, deserialize_with = "util::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl Emoji {
    pub fn unicode(name: impl Into<String>) -> Emoji {
        Emoji {
            id: None,
            name: name.into(),
            animated: None,
        }
    }

    pub fn custom(name: impl Into<String>, id: Snowflake, animated: bool) -> Emoji {
        Emoji {
            id: Some(id),
            name: name.into(),
            animated: Some(animated),
        }
    }

    // Only custom emojis can be animated
    pub fn is_animated(&self) -> bool {
        self.id.is_some() && self.animated.unwrap_or(false)
    }

    /// Key used in the reactions REST routes, e.g. `%F0%9F%91%8D`, `blob:1234` or `a:blob:1234`.
    pub fn encoded_key(&self) -> String {
        let name = urlencoding::encode(&self.name);

        match self.id {
            None => name.into_owned(),
            Some(id) if self.is_animated() => format!("a:{}:{}", name, id),
            Some(id) => format!("{}:{}", name, id),
        }
    }

    /// Same as [`Emoji::encoded_key`], except unicode emojis are left as the raw glyph.
    pub fn readable_key(&self) -> String {
        match self.id {
            None => self.name.clone(),
            Some(_) => self.encoded_key(),
        }
    }
}
