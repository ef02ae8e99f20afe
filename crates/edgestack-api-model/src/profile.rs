//! Profile read/write types.

/// Fields a profile read may return. Anything else stored on the record is
/// dropped before it leaves the service.
pub const PROFILE_READ_FIELDS: &[&str] = &[
    "userId",
    "email",
    "displayName",
    "realName",
    "activeness",
    "role",
    "interestTags",
    "applicationResponse",
    "dateOfJoining",
    "applicationStatus",
    "updatedAt",
];

/// The stub profile returned for guest identities, which have no row in the
/// users table until sign-up.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestProfile {
    /// The guest id part of the actor.
    pub guest_id: String,
    /// Identity type discriminator.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Always null for guests.
    pub email: Option<String>,
    /// Always null for guests.
    pub display_name: Option<String>,
    /// Always null for guests.
    pub real_name: Option<String>,
    /// Always null for guests.
    pub activeness: Option<String>,
    /// Always empty for guests.
    pub role: Vec<String>,
    /// Always empty for guests.
    pub interest_tags: Vec<String>,
    /// Always null for guests.
    pub application_response: Option<String>,
    /// Always null for guests.
    pub date_of_joining: Option<String>,
    /// Always null for guests.
    pub application_status: Option<String>,
    /// Always null for guests.
    pub updated_at: Option<String>,
    /// Human-readable explanation of the limited shape.
    pub message: &'static str,
}

impl GuestProfile {
    /// Build the stub for a guest id.
    #[must_use]
    pub fn new(guest_id: impl Into<String>) -> Self {
        Self {
            guest_id: guest_id.into(),
            kind: "guest",
            email: None,
            display_name: None,
            real_name: None,
            activeness: None,
            role: Vec::new(),
            interest_tags: Vec::new(),
            application_response: None,
            date_of_joining: None,
            application_status: None,
            updated_at: None,
            message: "Guest profile - limited until sign-up",
        }
    }
}

/// Response for whitelisted update operations (profile and item writes).
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UpdateOutput {
    /// Always true on success.
    pub ok: bool,
    /// The names of the fields that were written.
    pub updated: Vec<String>,
}
