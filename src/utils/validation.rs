//! Configuration validation utilities.
//!
//! This module checks generator settings before generation and verifies
//! that a cluster configuration really is a full mesh.

use crate::settings::GeneratorSettings;
use crate::topology::{ClusterConfig, NodeId};
use std::collections::{HashMap, HashSet};

/// Highest port a node may be assigned
const MAX_PORT: i64 = u16::MAX as i64;

/// Problems with generator settings
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("node count must be positive, got {nodes}")]
    EmptyCluster { nodes: i64 },

    #[error("ports {first}..={last} fall outside 0..=65535")]
    PortOutOfRange { first: i64, last: i64 },

    #[error("host cannot be empty")]
    EmptyHost,
}

/// Violations of the full-mesh invariants in a cluster configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("address {address} is used by both {first} and {second}")]
    DuplicateAddress { address: String, first: NodeId, second: NodeId },

    #[error("{node} lists {actual} peers, expected {expected}")]
    PeerCount { node: NodeId, expected: usize, actual: usize },

    #[error("{node} lists its own address as a peer")]
    SelfPeer { node: NodeId },

    #[error("{node} lists peer {peer} more than once")]
    DuplicatePeer { node: NodeId, peer: String },

    #[error("{node} lists peer {peer} which is not a cluster member")]
    UnknownPeer { node: NodeId, peer: String },
}

/// Validate generator settings
///
/// Checks for:
/// - A positive node count
/// - Every assigned port within `0..=65535`
/// - A non-empty host
///
/// Generation itself accepts any values; callers decide whether an error
/// here is fatal or only worth a warning.
///
/// # Examples
/// ```
/// use meshgen::settings::GeneratorSettings;
/// use meshgen::utils::validation::{validate_settings, SettingsError};
///
/// assert!(validate_settings(&GeneratorSettings::default()).is_ok());
///
/// let settings = GeneratorSettings { nodes: 0, ..GeneratorSettings::default() };
/// assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyCluster { nodes: 0 }));
/// ```
pub fn validate_settings(settings: &GeneratorSettings) -> Result<(), SettingsError> {
    if settings.nodes <= 0 {
        return Err(SettingsError::EmptyCluster { nodes: settings.nodes });
    }

    let first = settings.base_port;
    let last = first.saturating_add(settings.nodes - 1);
    if first < 0 || last > MAX_PORT {
        return Err(SettingsError::PortOutOfRange { first, last });
    }

    if settings.host.trim().is_empty() {
        return Err(SettingsError::EmptyHost);
    }

    Ok(())
}

/// Verify that a cluster configuration is a full mesh
///
/// Every address must be unique, and every node must list each other
/// node's address exactly once and never its own. Ports are not required
/// to be contiguous, so hand-edited files can be checked too.
pub fn verify_full_mesh(config: &ClusterConfig) -> Result<(), MeshError> {
    let mut owners: HashMap<&str, NodeId> = HashMap::new();
    for (id, record) in &config.nodes {
        if let Some(first) = owners.insert(record.address.as_str(), *id) {
            return Err(MeshError::DuplicateAddress {
                address: record.address.clone(),
                first,
                second: *id,
            });
        }
    }

    let expected = config.node_count().saturating_sub(1);
    for (id, record) in &config.nodes {
        let mut seen = HashSet::new();
        for peer in &record.peers {
            if *peer == record.address {
                return Err(MeshError::SelfPeer { node: *id });
            }
            if !owners.contains_key(peer.as_str()) {
                return Err(MeshError::UnknownPeer { node: *id, peer: peer.clone() });
            }
            if !seen.insert(peer.as_str()) {
                return Err(MeshError::DuplicatePeer { node: *id, peer: peer.clone() });
            }
        }

        if record.peers.len() != expected {
            return Err(MeshError::PeerCount {
                node: *id,
                expected,
                actual: record.peers.len(),
            });
        }
    }

    log::info!("Verified full mesh of {} nodes", config.node_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::generate_config;

    fn settings(nodes: i64, base_port: i64) -> GeneratorSettings {
        GeneratorSettings {
            nodes,
            base_port,
            ..GeneratorSettings::default()
        }
    }

    #[test]
    fn test_validate_settings_defaults_ok() {
        assert!(validate_settings(&GeneratorSettings::default()).is_ok());
    }

    #[test]
    fn test_validate_settings_empty_cluster() {
        assert_eq!(
            validate_settings(&settings(-3, 18000)),
            Err(SettingsError::EmptyCluster { nodes: -3 })
        );
    }

    #[test]
    fn test_validate_settings_port_range() {
        assert!(validate_settings(&settings(1, 65535)).is_ok());
        assert_eq!(
            validate_settings(&settings(2, 65535)),
            Err(SettingsError::PortOutOfRange { first: 65535, last: 65536 })
        );
        assert_eq!(
            validate_settings(&settings(3, -1)),
            Err(SettingsError::PortOutOfRange { first: -1, last: 1 })
        );
    }

    #[test]
    fn test_validate_settings_empty_host() {
        let settings = GeneratorSettings {
            host: "  ".to_string(),
            ..GeneratorSettings::default()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyHost));
    }

    #[test]
    fn test_verify_generated_configs() {
        for n in 0..8 {
            assert!(verify_full_mesh(&generate_config(n, 18000)).is_ok());
        }
    }

    #[test]
    fn test_verify_detects_missing_peer() {
        let mut config = generate_config(3, 9000);
        config.nodes.get_mut(&NodeId(1)).unwrap().peers.pop();

        assert_eq!(
            verify_full_mesh(&config),
            Err(MeshError::PeerCount { node: NodeId(1), expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_verify_detects_self_peer() {
        let mut config = generate_config(3, 9000);
        config.nodes.get_mut(&NodeId(0)).unwrap().peers[0] = "localhost:9000".to_string();

        assert_eq!(verify_full_mesh(&config), Err(MeshError::SelfPeer { node: NodeId(0) }));
    }

    #[test]
    fn test_verify_detects_duplicate_and_unknown_peers() {
        let mut config = generate_config(3, 9000);
        config.nodes.get_mut(&NodeId(2)).unwrap().peers = vec![
            "localhost:9000".to_string(),
            "localhost:9000".to_string(),
        ];
        assert_eq!(
            verify_full_mesh(&config),
            Err(MeshError::DuplicatePeer { node: NodeId(2), peer: "localhost:9000".to_string() })
        );

        config.nodes.get_mut(&NodeId(2)).unwrap().peers[1] = "localhost:9999".to_string();
        assert_eq!(
            verify_full_mesh(&config),
            Err(MeshError::UnknownPeer { node: NodeId(2), peer: "localhost:9999".to_string() })
        );
    }

    #[test]
    fn test_verify_detects_duplicate_address() {
        let mut config = generate_config(2, 9000);
        config.nodes.get_mut(&NodeId(1)).unwrap().address = "localhost:9000".to_string();

        assert!(matches!(
            verify_full_mesh(&config),
            Err(MeshError::DuplicateAddress { first: NodeId(0), second: NodeId(1), .. })
        ));
    }
}
