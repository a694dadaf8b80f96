//! # Meshgen - Full-mesh cluster configuration generator
//!
//! This library generates the static JSON configuration used to bootstrap
//! local test clusters: N nodes on sequential ports, each listing every
//! other node as a peer.
//!
//! ## Architecture
//!
//! - `topology`: Cluster data model and the pure full-mesh generator
//! - `settings`: Generator settings and their defaults
//! - `config_loader`: Settings loading, CLI overrides, cluster file I/O
//! - `utils`: Settings validation and full-mesh verification
//! - `report`: Human-readable generation summary
//! - `orchestrator`: Validate, generate, write and verify in one run
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meshgen::{config_loader, topology};
//! use std::path::Path;
//!
//! let config = topology::generate_config(10, 18000);
//! config_loader::write_config(&config, Path::new("config-10nodes.json"))?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Output Format
//!
//! ```json
//! {
//!   "nodes": {
//!     "node-0": { "address": "localhost:18000", "peers": ["localhost:18001", "..."] }
//!   },
//!   "initial_value": "initial-state"
//! }
//! ```
//!
//! ## Error Handling
//!
//! Generation never fails. File-facing functions return
//! `color_eyre::Result` with the path in the error context; validation and
//! verification report typed `thiserror` errors.

pub mod config_loader;
pub mod orchestrator;
pub mod report;
pub mod settings;
pub mod topology;
pub mod utils;
