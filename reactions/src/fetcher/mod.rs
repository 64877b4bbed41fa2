use crate::FetchError;
use async_trait::async_trait;
use model::guild::Emoji;
use model::user::User;

mod discord_fetcher;
pub use discord_fetcher::{DiscordReactionFetcher, PAGE_LIMIT};

/// Retrieves the users that reacted to a single message with a given emoji.
#[async_trait]
pub trait ReactionFetcher: Send + Sync {
    async fn fetch(&self, emoji: &Emoji) -> Result<Vec<User>, FetchError>;
}
