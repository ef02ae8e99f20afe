//! Canonical string construction for the EdgeStack signing scheme.
//!
//! The canonical form is the exact, order-fixed concatenation:
//!
//! ```text
//! {timestamp}:{METHOD}:{path}:{actor}
//! ```
//!
//! Both sides of the contract must agree byte-for-byte:
//!
//! - the method is upper-cased before inclusion;
//! - the path excludes any query string;
//! - the path must be byte-identical to what the signer used — no
//!   normalization or percent-decoding is applied on either side. This is
//!   the most fragile coupling in the system; any change here must ship in
//!   lockstep with the external signer.
//!
//! The request body is intentionally not part of the signed material, even
//! though the envelope decodes it for downstream consumers.

/// Build the canonical string over which the signature is computed.
///
/// # Examples
///
/// ```
/// use edgestack_auth::canonical::build_canonical_string;
///
/// let canonical =
///     build_canonical_string("1700000000000", "POST", "/interactions", "user:42");
/// assert_eq!(canonical, "1700000000000:POST:/interactions:user:42");
/// ```
#[must_use]
pub fn build_canonical_string(timestamp: &str, method: &str, path: &str, actor: &str) -> String {
    let method = method.to_uppercase();
    format!("{timestamp}:{method}:{path}:{actor}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_canonical_string_in_fixed_order() {
        let canonical = build_canonical_string("1700000000000", "POST", "/interactions", "user:42");
        assert_eq!(canonical, "1700000000000:POST:/interactions:user:42");
    }

    #[test]
    fn test_should_uppercase_method() {
        let canonical = build_canonical_string("1", "put", "/me", "guest:g1");
        assert_eq!(canonical, "1:PUT:/me:guest:g1");
    }

    #[test]
    fn test_should_preserve_actor_colons() {
        // The actor claim itself contains a colon; it is appended verbatim.
        let canonical = build_canonical_string("2", "GET", "/me", "user:a:b");
        assert_eq!(canonical, "2:GET:/me:user:a:b");
    }

    #[test]
    fn test_should_not_touch_path_bytes() {
        // No percent-decoding or normalization of the path.
        let canonical = build_canonical_string("3", "GET", "/items/a%20b", "user:1");
        assert_eq!(canonical, "3:GET:/items/a%20b:user:1");
    }
}
