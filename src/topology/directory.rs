use super::types::{Partition, Topology};
use crate::error::GatewayError;

/// Client for the external topology service.
///
/// The directory enumerates the partitions currently backing a named
/// service. Results are never cached: each call reflects membership at that
/// moment and is only valid for the one fan-out that requested it.
pub struct PartitionDirectory {
    http_client: reqwest::Client,
    base_url: String,
}

impl PartitionDirectory {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches every partition currently backing `service`.
    ///
    /// Any failure mode — directory unreachable, non-success status,
    /// undecodable body, or a service with no partitions — is a
    /// `ServiceDiscovery` fault that aborts the caller before any backend
    /// dispatch occurs.
    pub async fn list_partitions(&self, service: &str) -> Result<Topology, GatewayError> {
        let url = format!("{}/services/{}/partitions", self.base_url, service);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            GatewayError::ServiceDiscovery {
                service: service.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            return Err(GatewayError::ServiceDiscovery {
                service: service.to_string(),
                reason: format!("directory returned {}", response.status()),
            });
        }

        let partitions: Vec<Partition> =
            response
                .json()
                .await
                .map_err(|e| GatewayError::ServiceDiscovery {
                    service: service.to_string(),
                    reason: format!("undecodable partition list: {}", e),
                })?;

        if partitions.is_empty() {
            return Err(GatewayError::ServiceDiscovery {
                service: service.to_string(),
                reason: "service has no partitions".to_string(),
            });
        }

        tracing::debug!(
            "Resolved {} partition(s) for service {}",
            partitions.len(),
            service
        );

        Ok(Topology {
            service: service.to_string(),
            partitions,
        })
    }
}
