pub mod command;
pub mod http;
pub mod verify;

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

mod observability;
pub use observability::configure_logging;
