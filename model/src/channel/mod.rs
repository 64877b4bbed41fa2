mod message;
pub use message::Message;

mod reaction;
pub use reaction::Reaction;
