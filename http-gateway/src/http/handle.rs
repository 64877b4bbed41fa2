use crate::command;
use crate::http::{Reply, Server};
use crate::Error;
use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::Extension;
use model::interaction::{Interaction, InteractionResponse};
use std::sync::Arc;
use tracing::{debug, warn};

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

pub async fn handle(
    Extension(server): Extension<Arc<Server>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Reply, Error> {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

    if !server.verifier.verify(&body[..], signature, timestamp) {
        debug!("Rejected interaction with invalid signature");
        return Err(Error::InvalidSignature);
    }

    let interaction: Interaction = serde_json::from_slice(&body[..]).map_err(|e| {
        warn!(error = %e, "Failed to parse signed interaction");
        Error::MalformedPayload(e)
    })?;

    match interaction {
        Interaction::Ping(_) => Ok(Reply::Json(InteractionResponse::new_pong())),
        Interaction::ApplicationCommand(data) => command::dispatch(&server, *data).await,
        Interaction::Unsupported(unsupported) => {
            Err(Error::UnknownInteractionType(unsupported.r#type))
        }
    }
}
