//! Business logic for the EdgeStack backend.
//!
//! The provider ([`EdgeStackApi`]) owns the three stores and implements the
//! profile, item catalog, and interaction log operations; [`handler`]
//! bridges it onto the HTTP layer's handler trait.
#![allow(missing_docs, clippy::module_name_repetitions)]

pub mod handler;
pub mod ops;
pub mod provider;
pub mod state;
pub mod storage;
pub mod validate;

pub use handler::EdgeStackApiHandler;
pub use provider::EdgeStackApi;
pub use state::ApiState;
