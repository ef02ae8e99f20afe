//! Request signature verification.
//!
//! [`Authenticator`] owns the shared secret and turns one [`SignedRequest`]
//! into one [`AuthDecision`]. Verification is stateless per request: the
//! secret is the only shared value, and it is read-only after construction,
//! so one instance serves unlimited concurrent verifications.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::canonical::build_canonical_string;
use crate::decision::{AuthDecision, DenyReason};
use crate::envelope::{SignedRequest, extract_credentials};
use crate::secret::SharedSecret;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed skew between the signing timestamp and the server clock.
///
/// Bounds replay exposure to five minutes without server-side nonce
/// storage. The boundary is inclusive: a skew of exactly this value is
/// accepted.
pub const FRESHNESS_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Verifies inbound requests against the shared secret.
#[derive(Debug, Clone)]
pub struct Authenticator {
    secret: SharedSecret,
}

impl Authenticator {
    /// Create an authenticator holding the process-wide shared secret.
    #[must_use]
    pub fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Verify a request against the current wall clock.
    #[must_use]
    pub fn authenticate(&self, request: &SignedRequest<'_>) -> AuthDecision {
        self.authenticate_at(request, chrono::Utc::now().timestamp_millis())
    }

    /// Verify a request against an explicit clock reading (epoch ms).
    ///
    /// This is the full verification pipeline; [`authenticate`] is a thin
    /// wrapper that supplies the wall clock. Every failure path resolves to
    /// a structured deny — nothing panics and no error escapes.
    ///
    /// [`authenticate`]: Authenticator::authenticate
    #[must_use]
    pub fn authenticate_at(&self, request: &SignedRequest<'_>, now_ms: i64) -> AuthDecision {
        // CORS preflight carries no credentials and must never be denied.
        if request.method == http::Method::OPTIONS {
            return AuthDecision::AllowPreflight;
        }

        let Some(credentials) = extract_credentials(request.headers) else {
            return deny(DenyReason::MissingHeaders);
        };

        if request.path.is_empty() {
            return deny(DenyReason::MissingHeaders);
        }

        let Some(ts_ms) = parse_timestamp_ms(credentials.timestamp) else {
            return deny(DenyReason::BadTimestamp);
        };

        if (now_ms - ts_ms).abs() > FRESHNESS_WINDOW_MS {
            return deny(DenyReason::Stale);
        }

        let canonical = build_canonical_string(
            credentials.timestamp,
            request.method.as_str(),
            request.path,
            credentials.actor,
        );

        let expected = compute_signature(&self.secret, &canonical);

        // Operability seam: the canonical string and expected signature are
        // what an operator needs to debug a signer mismatch. The secret
        // itself never appears here.
        debug!(
            canonical = %canonical,
            expected = %expected,
            "computed request signature"
        );

        if credentials
            .signature
            .as_bytes()
            .ct_eq(expected.as_bytes())
            .into()
        {
            debug!(actor = %credentials.actor, "request signature verified");
            AuthDecision::Allow {
                actor: credentials.actor.to_owned(),
            }
        } else {
            deny(DenyReason::BadSignature)
        }
    }
}

/// Compute the signature for a canonical string:
/// `Base64(HMAC-SHA256(secret, canonical))`.
#[must_use]
pub fn compute_signature(secret: &SharedSecret, canonical: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can accept any key length");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Parse the transported timestamp into epoch milliseconds.
///
/// Values with fractional parts are accepted and truncated toward zero,
/// matching what a signer sending `Date.now().toString()` (or a float
/// rendering of it) produces. Non-finite values are rejected.
#[allow(clippy::cast_possible_truncation)] // Truncation toward zero is the contract.
fn parse_timestamp_ms(ts: &str) -> Option<i64> {
    let value = ts.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Saturating conversion; anything beyond i64 range is hopelessly stale
    // anyway.
    Some(value as i64)
}

/// Emit the single diagnostic record for a denial and build the decision.
fn deny(reason: DenyReason) -> AuthDecision {
    warn!(reason = %reason, "denied request");
    AuthDecision::Deny { reason }
}
