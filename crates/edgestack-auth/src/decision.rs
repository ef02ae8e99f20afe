//! Authorization decision and deny reasons.

use std::fmt;

/// Why a request was denied.
///
/// Reason codes surface only on the internal diagnostic channel; the
/// external response shape is identical for every denial so that a caller
/// cannot distinguish a forged signature from a stale timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// One of the credential headers (or method/path) is absent or empty.
    MissingHeaders,
    /// The timestamp header is not a parseable number.
    BadTimestamp,
    /// The timestamp is outside the freshness window.
    Stale,
    /// The supplied signature does not match the computed one.
    BadSignature,
}

impl DenyReason {
    /// The wire/diagnostic reason code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeaders => "missing_headers",
            Self::BadTimestamp => "bad_ts",
            Self::Stale => "stale",
            Self::BadSignature => "bad_sig",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of verifying one request.
///
/// Every verification resolves to exactly one of these variants; no error
/// escapes the authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// The request is verified; `actor` is the authenticated principal.
    Allow {
        /// The verified actor string, passed through verbatim.
        actor: String,
    },
    /// CORS preflight, allowed unconditionally and with no identity.
    AllowPreflight,
    /// The request is rejected.
    Deny {
        /// The diagnostic reason code.
        reason: DenyReason,
    },
}

impl AuthDecision {
    /// Whether the request may proceed.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Allow { .. } | Self::AllowPreflight)
    }

    /// Render the decision in the gateway authorizer contract shape.
    ///
    /// Allowed requests expose the actor through the authorizer context map
    /// (consumed downstream as `requestContext.authorizer.actor`); denials
    /// carry only the reason code, and only on this diagnostic shape — the
    /// body returned to the original caller never includes it.
    #[must_use]
    pub fn to_authorizer_output(&self) -> AuthorizerOutput {
        match self {
            Self::Allow { actor } => AuthorizerOutput {
                is_authorized: true,
                context: Some(AuthorizerContext {
                    actor: Some(actor.clone()),
                    reason: None,
                }),
            },
            Self::AllowPreflight => AuthorizerOutput {
                is_authorized: true,
                context: None,
            },
            Self::Deny { reason } => AuthorizerOutput {
                is_authorized: false,
                context: Some(AuthorizerContext {
                    actor: None,
                    reason: Some(reason.as_str()),
                }),
            },
        }
    }
}

/// Serializable authorizer decision, mirroring the gateway contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerOutput {
    /// Whether the request is authorized.
    pub is_authorized: bool,
    /// Context map attached to the decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AuthorizerContext>,
}

/// The authorizer context map.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AuthorizerContext {
    /// Verified actor, present on allow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Deny reason code, present on deny.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}
