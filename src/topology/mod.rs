//! Topology & Discovery Module
//!
//! Queries the external topology service for the live set of partitions
//! backing a named service.
//!
//! ## Core Mechanisms
//! - **Fresh per request**: Partition membership can change between calls,
//!   so the directory is asked again for every fan-out. Nothing is cached.
//! - **All-or-nothing discovery**: There is no meaningful partial topology.
//!   Any failure to enumerate partitions aborts the caller before a single
//!   backend dispatch is issued.

pub mod directory;
pub mod types;


pub use directory::PartitionDirectory;
pub use types::{Partition, PartitionKind, Topology};
