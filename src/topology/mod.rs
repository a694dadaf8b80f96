//! Network topology module.
//!
//! This module contains the cluster data model and the full-mesh generator
//! that fills it in.

pub mod types;
pub mod connections;
pub mod generator;

// Re-export key types and functions for easier access
pub use types::{ClusterConfig, NodeId, NodeRecord, ParseNodeIdError};
pub use connections::{full_mesh_peers, node_address};
pub use generator::{
    generate_cluster, generate_config, DEFAULT_BASE_PORT, DEFAULT_HOST, DEFAULT_NODE_COUNT, INITIAL_VALUE,
};
