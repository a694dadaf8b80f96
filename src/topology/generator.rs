//! Full-mesh cluster generation.
//!
//! Pure functions only: nothing in here touches the file system or the
//! console, so the generated structure can be tested directly.

use std::collections::BTreeMap;

use crate::settings::GeneratorSettings;
use crate::topology::connections::{full_mesh_peers, node_address, port_for};
use crate::topology::types::{ClusterConfig, NodeId, NodeRecord};

/// Default number of nodes in a generated cluster
pub const DEFAULT_NODE_COUNT: i64 = 10;

/// Default port of `node-0`
pub const DEFAULT_BASE_PORT: i64 = 18000;

/// Default host part of every address
pub const DEFAULT_HOST: &str = "localhost";

/// Value every node starts with
pub const INITIAL_VALUE: &str = "initial-state";

/// Generate a full-mesh cluster of `node_count` nodes on `localhost`.
///
/// Node `i` is named `node-<i>`, listens on `localhost:<base_port + i>` and
/// lists every other node as a peer. No validation is performed: a
/// non-positive `node_count` yields an empty node mapping.
///
/// # Examples
/// ```
/// use meshgen::topology::generate_config;
///
/// let config = generate_config(3, 9000);
/// assert_eq!(config.node_count(), 3);
/// assert_eq!(config.initial_value, "initial-state");
/// ```
pub fn generate_config(node_count: i64, base_port: i64) -> ClusterConfig {
    build_full_mesh(node_count, base_port, DEFAULT_HOST, INITIAL_VALUE)
}

/// Generate a full-mesh cluster from generator settings.
///
/// Same algorithm as [`generate_config`], with host and initial value taken
/// from `settings`.
pub fn generate_cluster(settings: &GeneratorSettings) -> ClusterConfig {
    build_full_mesh(
        settings.nodes,
        settings.base_port,
        &settings.host,
        &settings.initial_value,
    )
}

fn build_full_mesh(node_count: i64, base_port: i64, host: &str, initial_value: &str) -> ClusterConfig {
    let count = usize::try_from(node_count).unwrap_or(0);

    let mut nodes = BTreeMap::new();
    for i in 0..count {
        let record = NodeRecord {
            address: node_address(host, port_for(base_port, i)),
            peers: full_mesh_peers(host, base_port, count, i),
        };
        log::debug!("{}: {} with {} peers", NodeId(i), record.address, record.peers.len());
        nodes.insert(NodeId(i), record);
    }

    ClusterConfig {
        nodes,
        initial_value: initial_value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_node_scenario() {
        let config = generate_config(3, 9000);

        let expected = serde_json::json!({
            "nodes": {
                "node-0": {"address": "localhost:9000", "peers": ["localhost:9001", "localhost:9002"]},
                "node-1": {"address": "localhost:9001", "peers": ["localhost:9000", "localhost:9002"]},
                "node-2": {"address": "localhost:9002", "peers": ["localhost:9000", "localhost:9001"]}
            },
            "initial_value": "initial-state"
        });

        assert_eq!(serde_json::to_value(&config).unwrap(), expected);
    }

    #[test]
    fn test_single_node_has_no_peers() {
        let config = generate_config(1, 5000);

        assert_eq!(config.node_count(), 1);
        let node = &config.nodes[&NodeId(0)];
        assert_eq!(node.address, "localhost:5000");
        assert!(node.peers.is_empty());
    }

    #[test]
    fn test_non_positive_count_yields_empty_mapping() {
        for count in [0, -1, -50] {
            let config = generate_config(count, 5000);
            assert!(config.is_empty());
            assert_eq!(config.initial_value, INITIAL_VALUE);
        }
    }

    #[test]
    fn test_mesh_invariants_hold() {
        for n in 1..=12usize {
            let base_port = 20000;
            let config = generate_config(n as i64, base_port);
            assert_eq!(config.node_count(), n);

            let addresses: HashSet<&str> = config.nodes.values().map(|r| r.address.as_str()).collect();
            let expected: HashSet<String> = (0..n).map(|k| format!("localhost:{}", base_port + k as i64)).collect();
            assert_eq!(addresses.len(), n);
            assert!(expected.iter().all(|a| addresses.contains(a.as_str())));

            for record in config.nodes.values() {
                assert_eq!(record.peers.len(), n - 1);
                assert!(!record.peers.contains(&record.address));
            }
        }
    }

    #[test]
    fn test_huge_base_port_keeps_addresses_unique() {
        let config = generate_config(3, i64::MAX - 1);

        let addresses: HashSet<&str> = config.nodes.values().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses.len(), 3);
        assert_eq!(config.nodes[&NodeId(2)].address, "localhost:9223372036854775808");
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_config(10, 18000), generate_config(10, 18000));
    }

    #[test]
    fn test_nodes_iterate_in_index_order() {
        let config = generate_config(12, 18000);
        let ids: Vec<String> = config.nodes.keys().map(|id| id.to_string()).collect();
        assert_eq!(ids[2], "node-2");
        assert_eq!(ids[10], "node-10");
    }

    #[test]
    fn test_generate_cluster_uses_settings() {
        let settings = GeneratorSettings {
            nodes: 2,
            base_port: 7000,
            host: "127.0.0.1".to_string(),
            initial_value: "genesis".to_string(),
            output: None,
        };

        let config = generate_cluster(&settings);
        assert_eq!(config.initial_value, "genesis");
        assert_eq!(config.nodes[&NodeId(1)].address, "127.0.0.1:7001");
        assert_eq!(config.nodes[&NodeId(1)].peers, vec!["127.0.0.1:7000"]);
    }

    #[test]
    fn test_default_settings_match_generate_config() {
        let config = generate_cluster(&GeneratorSettings::default());
        assert_eq!(config, generate_config(DEFAULT_NODE_COUNT, DEFAULT_BASE_PORT));
    }
}
