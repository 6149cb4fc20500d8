use crate::error::GatewayError;
use crate::topology::{Partition, PartitionKind};

/// The resolved (partition kind, partition key) pair one dispatch addresses.
///
/// Transient: constructed per call from either a resolved room key (keyed
/// path) or an enumerated partition's low key (fan-out path), never kept
/// across calls.
#[derive(Debug, Clone, Copy)]
pub struct RouteTarget {
    pub kind: PartitionKind,
    pub key: i64,
}

impl RouteTarget {
    /// Target for a key resolved from a room identifier.
    pub fn for_key(key: i64) -> Self {
        Self {
            kind: PartitionKind::Int64Range,
            key,
        }
    }

    /// Target for a partition enumerated by the directory, addressed by its
    /// low key.
    pub fn for_partition(partition: &Partition) -> Self {
        Self {
            kind: partition.kind,
            key: partition.low_key,
        }
    }

    fn describe(&self) -> String {
        format!("{}/{}", self.kind.as_str(), self.key)
    }
}

/// Raw backend outcome: status and body exactly as the partition sent them.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one backend call per invocation through the reverse proxy.
pub struct RequestDispatcher {
    http_client: reqwest::Client,
    base_url: String,
}

impl RequestDispatcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Dispatches `operation` with `params` to the addressed partition.
    ///
    /// Exactly one network call, no retry; timeouts are whatever the
    /// transport applies. A transport failure is `PartitionUnreachable`;
    /// every HTTP status, success or not, is returned as-is for the caller
    /// to interpret.
    pub async fn dispatch(
        &self,
        target: &RouteTarget,
        operation: &str,
        params: &[(&str, String)],
    ) -> Result<BackendResponse, GatewayError> {
        let url = format!("{}/{}", self.base_url, operation);

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[
                ("partition_kind", target.kind.as_str().to_string()),
                ("partition_key", target.key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::PartitionUnreachable {
                target: target.describe(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::PartitionUnreachable {
                target: target.describe(),
                reason: format!("failed reading response body: {}", e),
            })?;

        tracing::debug!(
            "Dispatched {} to partition {} -> {}",
            operation,
            target.describe(),
            status
        );

        Ok(BackendResponse { status, body })
    }
}
