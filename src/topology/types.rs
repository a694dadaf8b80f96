//! Topology type definitions.
//!
//! This file contains the data model written to the cluster configuration
//! file: node identifiers, per-node records and the cluster configuration
//! that ties them together.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every node identifier (`node-0`, `node-1`, ...)
const NODE_ID_PREFIX: &str = "node-";

/// Identifier of one cluster member.
///
/// Ordered by numeric index, so a `BTreeMap<NodeId, _>` iterates in
/// generation order (`node-2` before `node-10`). Serialized as `node-<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Index of this node within the cluster
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", NODE_ID_PREFIX, self.0)
    }
}

/// Error returned when a string is not of the form `node-<index>`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid node identifier '{0}', expected node-<index>")]
pub struct ParseNodeIdError(String);

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s
            .strip_prefix(NODE_ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            // `node-01` would alias `node-1`
            .filter(|digits| *digits == "0" || !digits.starts_with('0'))
            .ok_or_else(|| ParseNodeIdError(s.to_string()))?;

        index
            .parse::<usize>()
            .map(NodeId)
            .map_err(|_| ParseNodeIdError(s.to_string()))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Address and peer list of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// `host:port` this node listens on
    pub address: String,
    /// Addresses of every other node, in ascending index order
    pub peers: Vec<String>,
}

/// Complete cluster configuration as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(deserialize_with = "deserialize_unique_nodes")]
    pub nodes: BTreeMap<NodeId, NodeRecord>,
    /// Value every node starts with
    pub initial_value: String,
}

impl ClusterConfig {
    /// Number of nodes in the cluster
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the cluster has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Deserialize the node map, failing on a repeated identifier instead of
/// keeping only the last record.
fn deserialize_unique_nodes<'de, D>(deserializer: D) -> Result<BTreeMap<NodeId, NodeRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueNodes;

    impl<'de> Visitor<'de> for UniqueNodes {
        type Value = BTreeMap<NodeId, NodeRecord>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of node identifiers to node records")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut nodes = BTreeMap::new();
            while let Some((id, record)) = access.next_entry::<NodeId, NodeRecord>()? {
                match nodes.entry(id) {
                    Entry::Occupied(_) => {
                        return Err(de::Error::custom(format!("duplicate node identifier {}", id)));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(record);
                    }
                }
            }
            Ok(nodes)
        }
    }

    deserializer.deserialize_map(UniqueNodes)
}
