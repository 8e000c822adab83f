//! Node gateway API module.
//!
//! The gateway exposes the hosted Lightning node as a JSON-over-HTTPS
//! service; this module holds its documented request/response shapes and the
//! thin HTTP client that speaks to it.

pub mod client;
pub mod types;

pub use client::NodeClient;
pub use types::*;
