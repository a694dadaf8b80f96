//! Peer connection management.
//!
//! This file builds node addresses and the full-mesh peer lists derived
//! from them.

/// Format the address of a node listening on `host:port`
pub fn node_address(host: &str, port: i128) -> String {
    format!("{}:{}", host, port)
}

/// Generate the full-mesh peer list for one node
///
/// # Arguments
/// * `host` - Host part shared by every address
/// * `base_port` - Port of node 0; node `j` listens on `base_port + j`
/// * `node_count` - Number of nodes in the cluster
/// * `node_index` - Index of the node the list is built for
///
/// # Returns
/// Addresses of every other node in ascending index order. The node's own
/// address is never included.
pub fn full_mesh_peers(host: &str, base_port: i64, node_count: usize, node_index: usize) -> Vec<String> {
    (0..node_count)
        .filter(|&j| j != node_index)
        .map(|j| node_address(host, port_for(base_port, j)))
        .collect()
}

/// Port assigned to the node at `index`.
///
/// Widened to `i128` so ports keep counting past `i64::MAX` instead of
/// repeating.
pub(crate) fn port_for(base_port: i64, index: usize) -> i128 {
    i128::from(base_port) + index as i128
}
