//! HTTP service layer for the EdgeStack backend.
//!
//! This crate implements the gateway pipeline in front of the business
//! logic, providing:
//!
//! - **Router**: Maps `(method, path)` pairs to API operations
//! - **Handler trait**: Defines the boundary between HTTP and business logic
//! - **Service**: Hyper `Service` that authenticates every request before
//!   dispatching it
//! - **Response helpers**: JSON success/error/preflight response formatting
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::ApiResponseBody;
pub use dispatch::{ApiHandler, NotImplementedHandler, RequestContext};
pub use router::ApiOperation;
pub use service::{ApiHttpConfig, ApiHttpService};
