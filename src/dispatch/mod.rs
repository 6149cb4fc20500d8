//! Dispatch Module
//!
//! The backend-facing client. Given a resolved route target and an
//! operation, builds the reverse-proxy URL and performs exactly one HTTP
//! call.
//!
//! ## Contract
//! - **No retry, no interpretation**: One network call per invocation. The
//!   raw status and body come back verbatim so callers can tell a backend
//!   application error (an HTTP status with backend semantics) from an
//!   unreachable partition (a transport fault, `PartitionUnreachable`).
//! - **Explicit configuration**: The backend base address is a constructor
//!   argument, never derived from ambient runtime context.

pub mod dispatcher;

#[cfg(test)]
mod tests;

pub use dispatcher::{BackendResponse, RequestDispatcher, RouteTarget};
