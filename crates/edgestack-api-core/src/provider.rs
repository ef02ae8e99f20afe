//! The backend provider.

use crate::state::ApiState;

/// Owns the table state and implements the API operations.
///
/// Operation handlers live in the [`ops`](crate::ops) modules as `impl`
/// blocks on this type.
#[derive(Debug, Default)]
pub struct EdgeStackApi {
    pub(crate) state: ApiState,
}

impl EdgeStackApi {
    /// Create a provider with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying table state.
    #[must_use]
    pub fn state(&self) -> &ApiState {
        &self.state
    }
}
