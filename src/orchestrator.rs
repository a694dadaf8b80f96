//! High-level orchestration of cluster generation.
//!
//! Ties settings validation, generation, file output and read-back
//! verification into the single linear run performed by the binary.

use color_eyre::Result;
use log::{info, warn};

use crate::config_loader::{load_config, write_config};
use crate::report::summary_lines;
use crate::settings::GeneratorSettings;
use crate::topology::generate_cluster;
use crate::utils::{validate_settings, verify_full_mesh};

/// Switches controlling how strictly a run treats its inputs and output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Abort on invalid settings instead of warning
    pub strict: bool,
    /// Re-read the written file and check that it is a full mesh
    pub verify: bool,
}

/// Generate the cluster described by `settings` and write it to
/// `settings.output_path()`.
///
/// In strict mode invalid settings abort before the output file is touched.
/// Returns the summary lines to print.
pub fn generate_cluster_file(settings: &GeneratorSettings, options: RunOptions) -> Result<Vec<String>> {
    if let Err(e) = validate_settings(settings) {
        if options.strict {
            return Err(e.into());
        }
        warn!("{}; generating anyway", e);
    }

    info!(
        "Generating full mesh of {} nodes from {}:{}",
        settings.nodes, settings.host, settings.base_port
    );
    let config = generate_cluster(settings);

    let output_path = settings.output_path();
    write_config(&config, &output_path)?;

    if options.verify {
        let written = load_config(&output_path)?;
        verify_full_mesh(&written)?;
    }

    Ok(summary_lines(&config, &output_path))
}
