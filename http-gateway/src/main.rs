use http_gateway::http::Server;
use http_gateway::{configure_logging, Config, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_envvar()?;
    configure_logging(config.json_log);

    let server = Server::new(config)?;
    info!("Starting server...");
    server.start().await
}
