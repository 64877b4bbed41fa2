mod snowflake;
pub use snowflake::Snowflake;

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod user;

mod util;
