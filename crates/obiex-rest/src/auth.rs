//! Authentication credentials for the Obiex API
//!
//! Every request is signed with HMAC-SHA256 over
//! `UPPERCASE(method) + path-with-query + timestamp-millis` (no
//! separators), keyed by the API secret, hex-encoded lowercase. The same
//! timestamp that goes into the signed content is sent in the
//! `x-api-timestamp` header; the server recomputes the HMAC from the
//! header value, so the two must never diverge.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RestError, RestResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";
/// Header carrying the signed timestamp (decimal epoch millis)
pub const TIMESTAMP_HEADER: &str = "x-api-timestamp";
/// Header carrying the lowercase hex HMAC-SHA256 signature
pub const SIGNATURE_HEADER: &str = "x-api-signature";

/// API credentials for signed requests
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

/// Timestamp and signature for one outbound request
///
/// Ephemeral: computed per call and consumed while attaching headers.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Epoch millis, as signed and as sent
    pub timestamp: u64,
    /// Lowercase hex HMAC-SHA256 digest
    pub signature: String,
}

impl Credentials {
    /// Create new credentials from API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `OBIEX_API_KEY` and `OBIEX_API_SECRET` from the environment.
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var("OBIEX_API_KEY")
            .map_err(|_| RestError::EnvVarNotSet("OBIEX_API_KEY".to_string()))?;
        let api_secret = std::env::var("OBIEX_API_SECRET")
            .map_err(|_| RestError::EnvVarNotSet("OBIEX_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request at the current time
    ///
    /// `canonical_path` must already carry the serialized query string,
    /// in the caller's key order. The method is uppercased before signing;
    /// inputs are otherwise not validated.
    pub fn sign(&self, method: &str, canonical_path: &str) -> RestResult<SignedRequest> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| RestError::SystemClock)?
            .as_millis() as u64;

        let signature = self.sign_at(method, canonical_path, timestamp);

        Ok(SignedRequest { timestamp, signature })
    }

    /// Sign a request at a fixed timestamp
    ///
    /// Deterministic: the same `(method, path, timestamp, secret)` always
    /// yields the same signature.
    pub fn sign_at(&self, method: &str, canonical_path: &str, timestamp: u64) -> String {
        let content = format!("{}{}{}", method.to_uppercase(), canonical_path, timestamp);

        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(content.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
