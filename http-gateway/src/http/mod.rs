mod server;
pub use server::Server;

mod handle;
pub use handle::handle;

mod response;
pub use response::{ErrorResponse, FileUpload, Reply};
