//! Ed25519 Request Verification
//!
//! Checks that an interaction was signed by the platform: the signature must
//! cover the timestamp header followed by the raw request body.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ed25519_dalek::{Signature, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use thiserror::Error;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Errors raised while provisioning the verification key.
#[derive(Debug, Error)]
pub enum PublicKeyError {
    /// Key is not hex.
    #[error("Public key is not valid hex: {0}")]
    Encoding(#[from] hex::FromHexError),
    /// Key has the wrong length.
    #[error("Public key must be 32 bytes, got {0}")]
    Length(usize),
    /// Key bytes are not a valid Ed25519 point.
    #[error("Public key is not a valid Ed25519 key")]
    Invalid(#[from] ed25519_dalek::SignatureError),
}

/// Parse a hex-encoded Ed25519 public key.
pub fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, PublicKeyError> {
    let bytes = hex::decode(hex_key.trim())?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| PublicKeyError::Length(bytes.len()))?;
    Ok(VerifyingKey::from_bytes(&bytes)?)
}

/// Decode a hex (or, failing that, base64) signature.
fn decode_signature(signature: &str) -> Option<Signature> {
    let signature = signature.trim();
    let bytes = hex::decode(signature)
        .ok()
        .or_else(|| STANDARD.decode(signature).ok())?;
    let bytes: [u8; SIGNATURE_LENGTH] = bytes.as_slice().try_into().ok()?;
    Some(Signature::from_bytes(&bytes))
}

fn verify_with_key(key: &VerifyingKey, signature: &str, timestamp: &str, body: &[u8]) -> bool {
    let Some(signature) = decode_signature(signature) else {
        return false;
    };

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify_strict(&message, &signature).is_ok()
}

/// Verify that `signature` is a valid Ed25519 signature over
/// `timestamp ‖ body` under `public_key` (hex).
///
/// Every failure, including a malformed key or signature, yields `false`.
pub fn verify_request(public_key: &str, signature: &str, timestamp: &str, body: &[u8]) -> bool {
    parse_public_key(public_key)
        .is_ok_and(|key| verify_with_key(&key, signature, timestamp, body))
}

/// Verifier bound to a public key parsed once at startup.
#[derive(Debug, Clone)]
pub struct RequestVerifier {
    key: VerifyingKey,
}

impl RequestVerifier {
    /// Wrap an already-parsed key.
    #[must_use]
    pub const fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(hex_key: &str) -> Result<Self, PublicKeyError> {
        parse_public_key(hex_key).map(Self::new)
    }

    /// Verify a request. A missing header is an ordinary verification failure.
    pub fn verify(&self, signature: Option<&str>, timestamp: Option<&str>, body: &[u8]) -> bool {
        match (signature, timestamp) {
            (Some(signature), Some(timestamp)) => {
                verify_with_key(&self.key, signature, timestamp, body)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn signing_key(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32])
    }

    fn public_hex(key: &SigningKey) -> String {
        hex::encode(key.verifying_key().to_bytes())
    }

    fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> Vec<u8> {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        key.sign(&message).to_bytes().to_vec()
    }

    #[test]
    fn valid_signature_passes() {
        let key = signing_key(7);
        let sig = hex::encode(sign(&key, "1700000000", b"{\"type\":1}"));

        assert!(verify_request(
            &public_hex(&key),
            &sig,
            "1700000000",
            b"{\"type\":1}"
        ));
    }

    #[test]
    fn known_test_key_matches_seed() {
        assert_eq!(
            public_hex(&signing_key(7)),
            crate::config::Config::default_for_test().public_key
        );
    }

    #[test]
    fn tampered_body_fails() {
        let key = signing_key(7);
        let sig = hex::encode(sign(&key, "1700000000", b"signed body"));

        assert!(!verify_request(&public_hex(&key), &sig, "1700000000", b"tampered"));
    }

    #[test]
    fn tampered_timestamp_fails() {
        let key = signing_key(7);
        let sig = hex::encode(sign(&key, "1700000000", b"body"));

        assert!(!verify_request(&public_hex(&key), &sig, "1700000001", b"body"));
    }

    #[test]
    fn wrong_key_fails() {
        let sig = hex::encode(sign(&signing_key(7), "1", b"body"));

        assert!(!verify_request(&public_hex(&signing_key(8)), &sig, "1", b"body"));
    }

    #[test]
    fn base64_signature_is_accepted() {
        let key = signing_key(7);
        let sig = STANDARD.encode(sign(&key, "1", b"body"));

        assert!(verify_request(&public_hex(&key), &sig, "1", b"body"));
    }

    #[test]
    fn malformed_inputs_fail() {
        let key = signing_key(7);
        let public = public_hex(&key);

        assert!(!verify_request(&public, "", "1", b"body"));
        assert!(!verify_request(&public, "not-a-signature", "1", b"body"));
        assert!(!verify_request(&public, &"ab".repeat(63), "1", b"body"));
        assert!(!verify_request("zz", &"ab".repeat(64), "1", b"body"));
        assert!(!verify_request("abcd", &"ab".repeat(64), "1", b"body"));
    }

    #[test]
    fn verifier_treats_missing_headers_as_failure() {
        let key = signing_key(7);
        let verifier = RequestVerifier::from_hex(&public_hex(&key)).unwrap();
        let sig = hex::encode(sign(&key, "1", b"body"));

        assert!(verifier.verify(Some(sig.as_str()), Some("1"), b"body"));
        assert!(!verifier.verify(None, Some("1"), b"body"));
        assert!(!verifier.verify(Some(sig.as_str()), None, b"body"));
        assert!(!verifier.verify(None, None, b"body"));
    }

    #[test]
    fn parse_public_key_reports_cause() {
        assert!(matches!(
            parse_public_key("xyz"),
            Err(PublicKeyError::Encoding(_))
        ));
        assert!(matches!(
            parse_public_key("abcd"),
            Err(PublicKeyError::Length(2))
        ));
        assert!(parse_public_key(&public_hex(&signing_key(1))).is_ok());
    }
}
