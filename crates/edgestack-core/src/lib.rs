//! Core types and configuration for EdgeStack.
//!
//! This crate provides the foundational building blocks shared across the
//! EdgeStack crates: the gateway configuration, the common error type, and
//! the verified caller identity ([`Actor`]).

mod config;
mod error;
mod types;

pub use config::GatewayConfig;
pub use error::{EdgeStackError, EdgeStackResult};
pub use types::Actor;
