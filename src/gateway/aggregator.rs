use super::protocol::OP_GET_ROOMS;
use crate::dispatch::{RequestDispatcher, RouteTarget};
use crate::error::GatewayError;
use crate::topology::PartitionDirectory;

use futures::future;
use std::sync::Arc;

/// Scatter-gather for the room listing operation.
///
/// One fan-out call: fetch the topology, dispatch `GetRooms` to every
/// partition concurrently, wait for all of them, then merge the decoded
/// lists in directory enumeration order. If any single partition returns a
/// non-success status the whole aggregation fails with that partition's
/// status and body — partial results are discarded by contract, not
/// returned best-effort. In-flight sibling dispatches are not cancelled
/// when one fails; the merge step simply ignores their results.
pub struct FanOutAggregator {
    directory: Arc<PartitionDirectory>,
    dispatcher: Arc<RequestDispatcher>,
    service_name: String,
}

impl FanOutAggregator {
    pub fn new(
        directory: Arc<PartitionDirectory>,
        dispatcher: Arc<RequestDispatcher>,
        service_name: &str,
    ) -> Self {
        Self {
            directory,
            dispatcher,
            service_name: service_name.to_string(),
        }
    }

    /// Lists rooms across every partition of the service.
    ///
    /// Each partition's body must decode as a JSON array of room entries;
    /// entries are concatenated without deduplication (key ranges are
    /// disjoint, so no room can appear twice) and no partition's
    /// contribution is ever silently dropped — a decode failure fails the
    /// call.
    pub async fn list_rooms(&self) -> Result<Vec<serde_json::Value>, GatewayError> {
        let topology = self.directory.list_partitions(&self.service_name).await?;

        let calls = topology.partitions.iter().map(|partition| {
            let dispatcher = Arc::clone(&self.dispatcher);
            let target = RouteTarget::for_partition(partition);
            async move { dispatcher.dispatch(&target, OP_GET_ROOMS, &[]).await }
        });

        // join_all preserves input order, so the merge below is stable with
        // respect to the directory's enumeration within this one call.
        let responses = future::join_all(calls).await;

        let mut rooms = Vec::new();
        for response in responses {
            let response = response?;
            if !response.is_success() {
                tracing::warn!(
                    "Aborting room listing: partition returned {}",
                    response.status
                );
                return Err(GatewayError::Backend {
                    status: response.status,
                    body: response.body,
                });
            }

            let mut entries: Vec<serde_json::Value> = serde_json::from_str(&response.body)
                .map_err(|e| {
                    GatewayError::Unexpected(anyhow::anyhow!(
                        "partition returned an undecodable room list: {}",
                        e
                    ))
                })?;
            rooms.append(&mut entries);
        }

        Ok(rooms)
    }
}
