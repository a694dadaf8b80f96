//! Human-readable summary of a generated cluster.

use std::path::Path;

use crate::topology::ClusterConfig;

/// Build the summary printed after generation.
///
/// One confirmation line, the node count, then one line per node in
/// generation order:
///
/// ```text
/// Generated config-10nodes.json
/// Total nodes: 10
///   node-0: localhost:18000 -> 9 peers
/// ```
pub fn summary_lines(config: &ClusterConfig, output_path: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(config.node_count() + 2);

    lines.push(format!("Generated {}", output_path.display()));
    lines.push(format!("Total nodes: {}", config.node_count()));
    for (id, record) in &config.nodes {
        lines.push(format!("  {}: {} -> {} peers", id, record.address, record.peers.len()));
    }

    lines
}
