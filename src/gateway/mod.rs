//! Gateway Module
//!
//! The client-facing layer of the gateway.
//!
//! ## Responsibilities
//! - **Keyed routing**: `GetGame`/`UpdateGame`/`EndGame` resolve the room's
//!   partition key and dispatch to the one owning partition, passing the
//!   backend's status and body through verbatim.
//! - **Scatter-gather**: `GetRooms` fans out to every partition the
//!   directory enumerates and merges the per-partition room lists,
//!   all-or-nothing.
//! - **Fault boundary**: `translate` renders backend outcomes as-is and
//!   collapses every infrastructure fault into the fixed
//!   "please retry" server-fault response.
//!
//! ## Submodules
//! - **`aggregator`**: Concurrent fan-out and merge for the listing
//!   operation.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Backend operation names, addressing parameters, and
//!   the DTOs the gateway validates before forwarding.
//! - **`translate`**: Mapping of internal outcomes onto client responses.

pub mod aggregator;
pub mod handlers;
pub mod protocol;
pub mod translate;


pub use aggregator::FanOutAggregator;
