pub mod csv;
pub use csv::TableBuilder;

mod error;
pub use error::{FetchError, Result};

pub mod fetcher;
pub use fetcher::{DiscordReactionFetcher, ReactionFetcher};

mod export;
pub use export::{export_reactions, Export, CSV_HEADER, MAX_EMOJIS};
