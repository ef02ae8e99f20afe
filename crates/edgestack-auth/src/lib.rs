//! HMAC request authentication for the EdgeStack gateway.
//!
//! This crate implements the verification side of the EdgeStack signing
//! scheme: given an inbound HTTP request carrying `x-actor`, `x-timestamp`
//! and `x-signature` headers, it decides whether the request was produced by
//! a trusted backend holding the shared secret, and on success yields the
//! verified caller identity (the actor string) for downstream handlers.
//!
//! # Scheme
//!
//! The signer computes `Base64(HMAC-SHA256(secret, StringToSign))` where:
//!
//! ```text
//! StringToSign = Timestamp + ":" + HTTP-Verb + ":" + Path + ":" + Actor
//! ```
//!
//! The timestamp is epoch milliseconds transported as a string and bounds
//! replay exposure to a five-minute window; no server-side nonce storage is
//! required. The request body is not part of the signed material (see
//! [`canonical`] for the exact contract with the signer).
//!
//! # Usage
//!
//! ```rust
//! use edgestack_auth::secret::SharedSecret;
//! use edgestack_auth::verify::Authenticator;
//!
//! let authenticator = Authenticator::new(SharedSecret::new(b"s3cr3t".to_vec()));
//!
//! // Build a SignedRequest from the request parts and body, then call
//! // authenticator.authenticate(&request) to obtain an AuthDecision.
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical string construction
//! - [`decision`] - Authorization decision and deny reasons
//! - [`envelope`] - Signed request envelope and credential header extraction
//! - [`secret`] - Shared secret type and startup loading
//! - [`verify`] - Main verification logic

pub mod canonical;
pub mod decision;
pub mod envelope;
pub mod secret;
pub mod verify;

pub use decision::{AuthDecision, DenyReason};
pub use envelope::SignedRequest;
pub use secret::{SecretError, SharedSecret, load_shared_secret};
pub use verify::{Authenticator, compute_signature};
