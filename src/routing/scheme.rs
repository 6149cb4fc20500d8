use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The range-partitioning layout of the backend room store.
///
/// Partition `p` (for `p` in `0..partition_count`) owns the key range
/// `[p * range_width, (p + 1) * range_width - 1]`. The gateway and the
/// backend provisioning must be constructed from the same scheme value;
/// the resolver cannot verify the agreement locally. If the live topology
/// ever diverges from this scheme (e.g. a repartition the gateway was not
/// reconfigured for), keyed operations will silently address the wrong
/// partition — a known risk of the design, detected by nothing in this
/// crate.
#[derive(Debug, Clone, Copy)]
pub struct PartitionScheme {
    partition_count: i64,
    range_width: i64,
}

impl PartitionScheme {
    pub fn new(partition_count: i64, range_width: i64) -> Self {
        assert!(partition_count > 0, "partition_count must be positive");
        assert!(range_width > 0, "range_width must be positive");
        Self {
            partition_count,
            range_width,
        }
    }

    pub fn partition_count(&self) -> i64 {
        self.partition_count
    }

    pub fn range_width(&self) -> i64 {
        self.range_width
    }

    /// Total number of keys covered by all partition ranges together.
    pub fn key_span(&self) -> i64 {
        self.partition_count * self.range_width
    }

    /// Low key of the range owned by partition `p`.
    pub fn low_key(&self, p: i64) -> i64 {
        p * self.range_width
    }

    /// Maps a room identifier to the partition key that owns it.
    ///
    /// Pure and deterministic: no clock, no randomness, no process-local
    /// state, so the same identifier resolves to the same key across calls
    /// and across gateway instances. Identifier validity (alphanumeric,
    /// length-bounded) is enforced upstream; any string hashes cleanly.
    pub fn resolve(&self, room_id: &str) -> i64 {
        let mut hasher = DefaultHasher::new();
        room_id.hash(&mut hasher);
        (hasher.finish() % self.key_span() as u64) as i64
    }
}

impl Default for PartitionScheme {
    /// Matches the backend's stock provisioning: four partitions of one
    /// hundred keys each.
    fn default() -> Self {
        Self::new(4, 100)
    }
}
