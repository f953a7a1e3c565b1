//! Bearer token claim decoding.
//!
//! The backend signs the token; the client never verifies that signature.
//! It only reads claims out of a token it stored itself, for UI gating.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token does not have the `header.payload.signature` shape.
    #[error("token must have 3 dot-separated segments, found {0}")]
    Malformed(usize),
    /// The payload segment is not valid unpadded base64url.
    #[error("token payload is not base64url: {0}")]
    Payload(#[from] base64::DecodeError),
    /// The payload decoded but is not the expected claims object.
    #[error("token claims are invalid: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims embedded in the session token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject; the user id.
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// Expiry, seconds since the Unix epoch. NumericDate may be fractional.
    pub exp: f64,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default)]
    pub iat: Option<f64>,
}

impl Claims {
    /// Expiry in milliseconds since the Unix epoch, saturating at the `i64`
    /// bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn expires_at_millis(&self) -> i64 {
        (self.exp * 1000.0).floor() as i64
    }

    /// A token is expired once `exp` is at or before `now_millis`.
    #[must_use]
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.expires_at_millis() <= now_millis
    }
}

/// Decode the claims from a `header.payload.signature` token.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not three segments, the payload
/// is not base64url, or the payload JSON lacks the expected claims.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Malformed(segments.len()));
    }
    // Some issuers pad the payload; strip it so the no-pad engine accepts both.
    let payload = general_purpose::URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    Ok(serde_json::from_slice(&payload)?)
}
