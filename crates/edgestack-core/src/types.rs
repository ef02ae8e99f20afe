//! Verified caller identity.

use std::fmt;

/// A verified caller identity, produced by the request authenticator.
///
/// The wire form is `user:<id>` for registered users and `guest:<id>` for
/// anonymous callers. The authenticator itself treats the actor claim as an
/// opaque string; handlers parse it into this type when they need to
/// distinguish the two variants or extract the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Actor {
    /// A registered user, keyed into the users table by the id part.
    User(String),
    /// An anonymous caller with an ephemeral id.
    Guest(String),
}

impl Actor {
    /// Parse an actor string of the form `user:<id>` or `guest:<id>`.
    ///
    /// # Errors
    /// Returns [`EdgeStackError::InvalidActor`](crate::EdgeStackError) for any
    /// other shape.
    pub fn parse(s: &str) -> Result<Self, crate::EdgeStackError> {
        if let Some(id) = s.strip_prefix("user:") {
            Ok(Self::User(id.to_owned()))
        } else if let Some(id) = s.strip_prefix("guest:") {
            Ok(Self::Guest(id.to_owned()))
        } else {
            Err(crate::EdgeStackError::InvalidActor(s.to_owned()))
        }
    }

    /// The id part of the identity, without the variant prefix.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User(id) | Self::Guest(id) => id,
        }
    }

    /// Whether this is a registered user identity.
    #[must_use]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// The user id, if this is a `user:` identity.
    #[must_use]
    pub fn as_user(&self) -> Option<&str> {
        match self {
            Self::User(id) => Some(id),
            Self::Guest(_) => None,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Guest(id) => write!(f, "guest:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_user_actor() {
        let actor = Actor::parse("user:abc123").unwrap();
        assert_eq!(actor, Actor::User("abc123".to_owned()));
        assert_eq!(actor.id(), "abc123");
        assert!(actor.is_user());
        assert_eq!(actor.as_user(), Some("abc123"));
    }

    #[test]
    fn test_should_parse_guest_actor() {
        let actor = Actor::parse("guest:def456").unwrap();
        assert_eq!(actor, Actor::Guest("def456".to_owned()));
        assert!(!actor.is_user());
        assert_eq!(actor.as_user(), None);
    }

    #[test]
    fn test_should_reject_unknown_prefix() {
        assert!(Actor::parse("admin:1").is_err());
        assert!(Actor::parse("user").is_err());
        assert!(Actor::parse("").is_err());
    }

    #[test]
    fn test_should_round_trip_display() {
        let actor = Actor::parse("user:42").unwrap();
        assert_eq!(actor.to_string(), "user:42");
        let actor = Actor::parse("guest:42").unwrap();
        assert_eq!(actor.to_string(), "guest:42");
    }
}
