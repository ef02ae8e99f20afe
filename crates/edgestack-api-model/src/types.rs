//! Controlled vocabularies.
//!
//! Every enumerated field in the API is restricted to one of these closed
//! sets; anything outside the set is a validation error, never a passthrough.

use std::fmt;

/// Interaction event types, with their default weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// The actor viewed an item.
    View,
    /// The actor liked an item.
    Like,
    /// The actor purchased an item.
    Purchase,
    /// The actor commented on an item.
    Comment,
    /// The actor shared an item.
    Share,
}

impl EventType {
    /// All event types.
    pub const ALL: [Self; 5] = [
        Self::View,
        Self::Like,
        Self::Purchase,
        Self::Comment,
        Self::Share,
    ];

    /// Parse an upper-cased event type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "VIEW" => Some(Self::View),
            "LIKE" => Some(Self::Like),
            "PURCHASE" => Some(Self::Purchase),
            "COMMENT" => Some(Self::Comment),
            "SHARE" => Some(Self::Share),
            _ => None,
        }
    }

    /// The wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Like => "LIKE",
            Self::Purchase => "PURCHASE",
            Self::Comment => "COMMENT",
            Self::Share => "SHARE",
        }
    }

    /// The weight recorded when the caller does not supply one.
    #[must_use]
    pub fn default_weight(self) -> i64 {
        match self {
            Self::Like => 2,
            Self::Purchase => 5,
            Self::View | Self::Comment | Self::Share => 1,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User activeness states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activeness {
    /// Actively participating.
    Active,
    /// Temporarily inactive.
    Dormant,
    /// No longer participating.
    Inactive,
}

impl Activeness {
    /// Parse a lower-cased activeness name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "active" => Some(Self::Active),
            "dormant" => Some(Self::Dormant),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Membership application states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Application rejected.
    Rejected,
    /// Application accepted.
    Accepted,
    /// Application pending review.
    #[serde(rename = "under review")]
    UnderReview,
}

impl ApplicationStatus {
    /// Parse an application status name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rejected" => Some(Self::Rejected),
            "accepted" => Some(Self::Accepted),
            "under review" => Some(Self::UnderReview),
            _ => None,
        }
    }
}

/// Item catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Educational content.
    Education,
    /// Fitness content.
    Fitness,
    /// Tooling content.
    Tools,
}

impl ItemCategory {
    /// All categories.
    pub const ALL: [Self; 3] = [Self::Education, Self::Fitness, Self::Tools];

    /// Parse a lower-cased category name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "education" => Some(Self::Education),
            "fitness" => Some(Self::Fitness),
            "tools" => Some(Self::Tools),
            _ => None,
        }
    }

    /// The wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Fitness => "fitness",
            Self::Tools => "tools",
        }
    }
}
