//! Room Gateway Library
//!
//! This library crate defines the core modules of the gateway that fronts the
//! partitioned room store. It serves as the foundation for the binary
//! executable (`main.rs`).
//!
//! ## Architecture Modules
//! The gateway is composed of five loosely coupled subsystems:
//!
//! - **`routing`**: The partitioning scheme. Maps a room identifier to the
//!   64-bit partition key the backend uses for range partitioning.
//! - **`topology`**: The discovery layer. Queries the external topology
//!   service for the live set of partitions backing the room store.
//! - **`dispatch`**: The backend client. Addresses a resolved partition
//!   through the reverse proxy and returns the raw HTTP outcome.
//! - **`gateway`**: The client-facing layer. Axum handlers for the room
//!   operations, the scatter-gather aggregator for listings, and the
//!   translation of internal faults into client responses.
//! - **`error`**: The gateway fault taxonomy shared by all of the above.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod routing;
pub mod topology;
