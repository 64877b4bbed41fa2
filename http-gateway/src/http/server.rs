use crate::verify::SignatureVerifier;
use crate::{Config, Error};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct Server {
    pub config: Config,
    pub verifier: SignatureVerifier,
    pub http_client: reqwest::Client,
}

impl Server {
    pub fn new(config: Config) -> Result<Server, Error> {
        let verifier = SignatureVerifier::from_hex(&config.discord_public_key)?;
        let http_client = Server::build_http_client()?;

        Ok(Server {
            config,
            verifier,
            http_client,
        })
    }

    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/interactions", post(super::handle))
            .layer(Extension(self))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start(self) -> Result<(), Error> {
        let address: SocketAddr = self.config.server_addr.parse()?;
        let app = Arc::new(self).router();

        let listener = TcpListener::bind(address).await?;
        info!("Listening on {}", address);

        axum::serve(listener, app).await?;

        Ok(())
    }

    fn build_http_client() -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .use_rustls_tls()
            .build()?;

        Ok(client)
    }
}

async fn index() -> Json<Value> {
    Json(json!({ "success": true }))
}
