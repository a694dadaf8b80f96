//! Settings loading, CLI overrides and cluster configuration file I/O.

use crate::settings::GeneratorSettings;
use crate::topology::ClusterConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Load generator settings from a YAML file
pub fn load_settings(settings_path: &Path) -> Result<GeneratorSettings> {
    info!("Loading generator settings from: {:?}", settings_path);

    let file = File::open(settings_path)
        .wrap_err_with(|| format!("Failed to open settings file '{}'", settings_path.display()))?;

    let settings: GeneratorSettings = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse settings file '{}'", settings_path.display()))?;

    Ok(settings)
}

/// CLI arguments that override settings file values
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nodes: Option<i64>,
    pub base_port: Option<i64>,
    pub host: Option<String>,
    pub initial_value: Option<String>,
    pub output: Option<PathBuf>,
}

/// Apply CLI overrides on top of loaded (or default) settings
pub fn apply_cli_overrides(settings: &mut GeneratorSettings, overrides: &CliOverrides) {
    if let Some(nodes) = overrides.nodes {
        settings.nodes = nodes;
    }
    if let Some(base_port) = overrides.base_port {
        settings.base_port = base_port;
    }
    if let Some(host) = &overrides.host {
        settings.host = host.clone();
    }
    if let Some(initial_value) = &overrides.initial_value {
        settings.initial_value = initial_value.clone();
    }
    if let Some(output) = &overrides.output {
        settings.output = Some(output.clone());
    }
}

/// Write a cluster configuration as 2-space indented JSON, replacing any
/// existing file at `output_path`.
///
/// The document is serialized before the file is opened, so a failure never
/// leaves a truncated file behind.
pub fn write_config(config: &ClusterConfig, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .wrap_err("Failed to serialize cluster configuration to JSON")?;

    fs::write(output_path, json)
        .wrap_err_with(|| format!("Failed to write cluster configuration to '{}'", output_path.display()))?;

    info!("Cluster configuration written to {}", output_path.display());
    Ok(())
}

/// Load a previously generated cluster configuration
pub fn load_config(config_path: &Path) -> Result<ClusterConfig> {
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open cluster configuration '{}'", config_path.display()))?;

    let config: ClusterConfig = serde_json::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse cluster configuration '{}'", config_path.display()))?;

    Ok(config)
}
