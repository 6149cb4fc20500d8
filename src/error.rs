//! Gateway Fault Taxonomy
//!
//! Every failure inside the gateway is one of four kinds, kept distinct all
//! the way through the call path. Only the final translation step
//! (`gateway::translate`) collapses the infrastructure kinds into the
//! generic client-facing response.

use thiserror::Error;

/// The faults a gateway call can surface.
///
/// `Backend` is not an infrastructure fault: it carries a non-success status
/// the partition itself produced (validation failure, unknown room, ...) and
/// is passed through to the client verbatim. The other variants never leak
/// their detail past the translation boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The topology service could not produce a partition list for the
    /// backend service. Fatal to a fan-out call before any dispatch happens;
    /// there is no meaningful partial topology.
    #[error("topology lookup for '{service}' failed: {reason}")]
    ServiceDiscovery { service: String, reason: String },

    /// A specific partition endpoint could not be reached at the transport
    /// level. Distinct from any HTTP status the partition might return.
    #[error("partition {target} unreachable: {reason}")]
    PartitionUnreachable { target: String, reason: String },

    /// The partition answered with a non-success status. Status and body are
    /// the backend's own and must reach the client unmodified.
    #[error("backend returned status {status}")]
    Backend { status: u16, body: String },

    /// Anything else (serialization faults and the like). Caught at the
    /// outermost boundary and rendered as a generic server fault.
    #[error("unexpected gateway fault: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn unexpected<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GatewayError::Unexpected(anyhow::Error::new(err))
    }
}
