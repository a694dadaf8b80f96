//! Generator settings.
//!
//! Node count, base port, host, initial value and output path, with the
//! defaults used when neither a settings file nor a flag provides them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::topology::{DEFAULT_BASE_PORT, DEFAULT_HOST, DEFAULT_NODE_COUNT, INITIAL_VALUE};

/// Knobs controlling cluster generation.
///
/// Loaded from an optional YAML settings file; any field left out falls back
/// to its default.
///
/// ```yaml
/// nodes: 5
/// base_port: 19000
/// host: "127.0.0.1"
/// output: "cluster.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Number of nodes; non-positive values produce an empty cluster
    pub nodes: i64,
    /// Port of `node-0`
    pub base_port: i64,
    pub host: String,
    pub initial_value: String,
    /// Output file; defaults to `config-<nodes>nodes.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl GeneratorSettings {
    /// Path the cluster configuration is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("config-{}nodes.json", self.nodes)))
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODE_COUNT,
            base_port: DEFAULT_BASE_PORT,
            host: DEFAULT_HOST.to_string(),
            initial_value: INITIAL_VALUE.to_string(),
            output: None,
        }
    }
}
