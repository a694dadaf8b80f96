use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use std::path::PathBuf;

use meshgen::config_loader::{self, CliOverrides};
use meshgen::orchestrator::{generate_cluster_file, RunOptions};
use meshgen::settings::GeneratorSettings;

/// Full-mesh cluster configuration generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes [default: 10]
    #[arg(short, long, allow_negative_numbers = true)]
    nodes: Option<i64>,

    /// Port of node-0; node i listens on base-port + i [default: 18000]
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    base_port: Option<i64>,

    /// Host part of every node address [default: localhost]
    #[arg(long)]
    host: Option<String>,

    /// Value every node starts with [default: initial-state]
    #[arg(long)]
    initial_value: Option<String>,

    /// Output file [default: config-<nodes>nodes.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML file with generator settings; flags override its values
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Reject invalid settings instead of warning about them
    #[arg(long)]
    strict: bool,

    /// Re-read the written file and check that it is a full mesh
    #[arg(long)]
    verify: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nodes: self.nodes,
            base_port: self.base_port,
            host: self.host.clone(),
            initial_value: self.initial_value.clone(),
            output: self.output.clone(),
        }
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            strict: self.strict,
            verify: self.verify,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut settings = match &args.settings {
        Some(path) => config_loader::load_settings(path)?,
        None => GeneratorSettings::default(),
    };
    config_loader::apply_cli_overrides(&mut settings, &args.overrides());

    for line in generate_cluster_file(&settings, args.options())? {
        println!("{}", line);
    }

    Ok(())
}
