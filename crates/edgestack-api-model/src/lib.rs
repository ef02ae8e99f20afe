//! API data types for the EdgeStack backend.
//!
//! This crate provides the request/response types and error taxonomy shared
//! by the business logic and HTTP transport crates. The JSON protocol is
//! plain serde derives; no codegen is involved.

pub mod error;
pub mod interaction;
pub mod profile;
pub mod types;

pub use error::{ApiError, ApiErrorCode};
pub use interaction::{InteractionRecord, ListInteractionsOutput, PostInteractionInput};
pub use types::{Activeness, ApplicationStatus, EventType, ItemCategory};
