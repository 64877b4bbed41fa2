use crate::Error;
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use tracing::debug;

/// Checks the `X-Signature-Ed25519` header Discord attaches to every interaction.
///
/// The signature covers the timestamp header followed by the body exactly as it arrived, so
/// verification must run on the raw bytes before anything parses them.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    public_key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(public_key: VerifyingKey) -> SignatureVerifier {
        SignatureVerifier { public_key }
    }

    pub fn from_hex(public_key: &str) -> Result<SignatureVerifier, Error> {
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        hex::decode_to_slice(public_key.trim(), &mut bytes)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;

        let public_key =
            VerifyingKey::from_bytes(&bytes).map_err(|e| Error::InvalidPublicKey(e.to_string()))?;

        Ok(SignatureVerifier::new(public_key))
    }

    pub fn verify(&self, body: &[u8], signature: Option<&str>, timestamp: Option<&str>) -> bool {
        let (signature, timestamp) = match (signature, timestamp) {
            (Some(signature), Some(timestamp)) if !signature.is_empty() && !timestamp.is_empty() => {
                (signature, timestamp)
            }
            _ => {
                debug!("Missing signature headers");
                return false;
            }
        };

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        if let Err(e) = hex::decode_to_slice(signature, &mut bytes) {
            debug!(error = %e, "Signature was not valid hex");
            return false;
        }

        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.public_key.verify(&message, &signature).is_ok()
    }
}

/// Verifies a single request against a hex encoded public key. Never errors: any problem with
/// the inputs counts as a failed verification.
pub fn verify_signature(body: &[u8], signature: &str, timestamp: &str, public_key: &str) -> bool {
    match SignatureVerifier::from_hex(public_key) {
        Ok(verifier) => verifier.verify(body, Some(signature), Some(timestamp)),
        Err(_) => false,
    }
}
