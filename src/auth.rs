//! Request signing for the panel's `request_token` / `request_time` scheme.
//!
//! The panel proves possession of the shared API key without ever seeing it
//! on the wire: each request carries the current Unix time in seconds and a
//! token derived from that time and the key. The panel recomputes the token
//! with its own copy of the key and accepts it within a time window.

use chrono::Utc;
use md5::{Digest as _, Md5};
use secrecy::{ExposeSecret as _, SecretString};

/// The two signing fields attached to every outbound request.
#[derive(Clone, Debug)]
pub(crate) struct SigningFields {
    pub request_time: String,
    pub request_token: String,
}

impl SigningFields {
    /// Issues a fresh timestamp/token pair for one call.
    pub(crate) fn issue(key: &SecretString) -> Self {
        let request_time = Utc::now().timestamp().to_string();
        let request_token = token(&request_time, key.expose_secret());
        Self {
            request_time,
            request_token,
        }
    }
}

/// Derives the per-request proof-of-possession token.
///
/// `token = md5_hex(timestamp ++ md5_hex(key))`, both digests 32 characters
/// of lowercase hex. MD5 is fixed by the panel's own verification; swapping
/// it for a stronger digest breaks wire compatibility. Timestamps have whole
/// second resolution, so two calls within the same second yield the same
/// token; the panel accepts that.
#[must_use]
pub fn token(timestamp: &str, key: &str) -> String {
    let inner = md5_hex(key.as_bytes());
    md5_hex(format!("{timestamp}{inner}").as_bytes())
}

fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}
