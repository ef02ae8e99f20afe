//! The signed request envelope.
//!
//! A [`SignedRequest`] is the authenticator's view of one inbound request:
//! method, path (query string excluded), the credential headers, the raw
//! body bytes and the transport-encoding flag. It exists only for the
//! duration of one verification; nothing in it is persisted.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;

/// Header carrying the caller's identity claim.
pub const HEADER_ACTOR: &str = "x-actor";
/// Header carrying the signing timestamp (epoch milliseconds as a string).
pub const HEADER_TIMESTAMP: &str = "x-timestamp";
/// Header carrying the base64-encoded HMAC signature.
pub const HEADER_SIGNATURE: &str = "x-signature";

/// One inbound request as seen by the authenticator.
#[derive(Debug)]
pub struct SignedRequest<'a> {
    /// HTTP method.
    pub method: &'a http::Method,
    /// Request path, excluding any query string.
    pub path: &'a str,
    /// Request headers. `http::HeaderMap` keys are lower-cased on insert,
    /// so lookups are case-insensitive by construction.
    pub headers: &'a http::HeaderMap,
    /// Raw body bytes as received from the transport.
    pub body: &'a [u8],
    /// Whether the transport delivered the body base64-encoded.
    pub is_base64_encoded: bool,
}

impl<'a> SignedRequest<'a> {
    /// Build an envelope from decomposed request parts.
    ///
    /// The path is taken from the URI and therefore never includes the
    /// query string.
    #[must_use]
    pub fn from_parts(
        parts: &'a http::request::Parts,
        body: &'a [u8],
        is_base64_encoded: bool,
    ) -> Self {
        Self {
            method: &parts.method,
            path: parts.uri.path(),
            headers: &parts.headers,
            body,
            is_base64_encoded,
        }
    }

    /// The body as downstream handlers should see it.
    ///
    /// When the transport flag indicates base64, the body is decoded and
    /// must be valid UTF-8; any decode failure degrades to an empty body
    /// instead of failing the request, so canonicalization and the
    /// signature check stay deterministic. The result is not part of the
    /// signed material.
    #[must_use]
    pub fn normalized_body(&self) -> Bytes {
        if !self.is_base64_encoded {
            return Bytes::copy_from_slice(self.body);
        }

        BASE64
            .decode(self.body)
            .ok()
            .filter(|raw| std::str::from_utf8(raw).is_ok())
            .map(Bytes::from)
            .unwrap_or_default()
    }
}

/// The credential headers of one request.
#[derive(Debug)]
pub struct Credentials<'a> {
    /// The unverified actor claim.
    pub actor: &'a str,
    /// The signing timestamp, as transported.
    pub timestamp: &'a str,
    /// The supplied signature.
    pub signature: &'a str,
}

/// Extract the credential headers, treating absent and empty values alike.
///
/// Returns `None` when any credential is missing — there is no
/// partial-credential mode.
#[must_use]
pub fn extract_credentials(headers: &http::HeaderMap) -> Option<Credentials<'_>> {
    let actor = header_value(headers, HEADER_ACTOR)?;
    let timestamp = header_value(headers, HEADER_TIMESTAMP)?;
    let signature = header_value(headers, HEADER_SIGNATURE)?;

    Some(Credentials {
        actor,
        timestamp,
        signature,
    })
}

/// Look up a header as a non-empty string.
fn header_value<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}
