//! Shared secret provisioning.
//!
//! The HMAC shared secret is provisioned out-of-band and loaded exactly once
//! during process startup, then injected into the [`Authenticator`] as an
//! immutable value. A process that cannot load its secret must not serve
//! requests: denying every caller with `bad_sig` would misreport an
//! operational fault as a caller-side problem.
//!
//! [`Authenticator`]: crate::verify::Authenticator

use std::env;
use std::fmt;

/// Environment variable holding the secret value directly.
pub const ENV_SECRET: &str = "HMAC_SECRET";

/// Environment variable pointing at a file containing the secret
/// (the usual shape for a secrets-store volume mount).
pub const ENV_SECRET_FILE: &str = "HMAC_SECRET_FILE";

/// The process-wide HMAC key.
///
/// Immutable after load. `Debug` output redacts the value; the type has no
/// `Display` impl, so the secret cannot end up in logs by accident.
#[derive(Clone)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// Create a shared secret from raw key bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Errors that can occur while loading the shared secret.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// Neither `HMAC_SECRET_FILE` nor `HMAC_SECRET` is set.
    #[error("shared secret is not configured (set {ENV_SECRET_FILE} or {ENV_SECRET})")]
    NotConfigured,

    /// The secret file could not be read.
    #[error("cannot read shared secret file {path}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configured secret resolves to an empty value.
    #[error("shared secret is empty")]
    Empty,
}

/// Load the shared secret from the environment.
///
/// `HMAC_SECRET_FILE` takes precedence over `HMAC_SECRET`; a trailing
/// newline in the file is stripped. This is a blocking operation intended
/// for startup only — callers retry around it, not around request handling.
///
/// # Errors
///
/// Returns a [`SecretError`] if no secret is configured, the file cannot be
/// read, or the resolved value is empty.
pub fn load_shared_secret() -> Result<SharedSecret, SecretError> {
    if let Ok(path) = env::var(ENV_SECRET_FILE) {
        let raw = std::fs::read_to_string(&path).map_err(|source| SecretError::Io {
            path: path.clone(),
            source,
        })?;
        let trimmed = raw.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            return Err(SecretError::Empty);
        }
        return Ok(SharedSecret::new(trimmed.as_bytes().to_vec()));
    }

    if let Ok(value) = env::var(ENV_SECRET) {
        if value.is_empty() {
            return Err(SecretError::Empty);
        }
        return Ok(SharedSecret::new(value.into_bytes()));
    }

    Err(SecretError::NotConfigured)
}
