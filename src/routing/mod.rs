//! Routing Module
//!
//! Implements the partitioning scheme shared between the gateway and the
//! backend room store.
//!
//! ## Core Concepts
//! - **Scheme**: A single `PartitionScheme` value (partition count and range
//!   width) describes how the 64-bit key space is split into ranges. The
//!   same value must be used both here and wherever the backend's key ranges
//!   are provisioned.
//! - **Resolution**: `resolve` hashes a room identifier into the key space,
//!   deterministically selecting the key — and therefore the partition —
//!   that owns the room.

pub mod scheme;


pub use scheme::PartitionScheme;
