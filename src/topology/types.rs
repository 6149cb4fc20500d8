use serde::{Deserialize, Serialize};

/// How a partition's key space is addressed.
///
/// The room store only uses 64-bit signed range partitioning, but the kind
/// travels on the wire (both from the directory and to the reverse proxy),
/// so it is modeled rather than assumed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartitionKind {
    Int64Range,
}

impl PartitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionKind::Int64Range => "Int64Range",
        }
    }
}

/// One partition of the backend service, as reported by the directory.
///
/// `low_key..=high_key` is the contiguous slice of the key space this
/// partition owns. Ranges across a service's partitions are disjoint and
/// cover the space, so a resolved key identifies exactly one partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Partition {
    /// Opaque partition identity assigned by the directory.
    pub id: String,
    pub kind: PartitionKind,
    pub low_key: i64,
    pub high_key: i64,
}

impl Partition {
    pub fn contains(&self, key: i64) -> bool {
        (self.low_key..=self.high_key).contains(&key)
    }
}

/// The live enumeration of a service's partitions at a point in time.
///
/// Valid for the duration of one fan-out call only; read-only after fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topology {
    pub service: String,
    pub partitions: Vec<Partition>,
}
