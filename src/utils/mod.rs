//! Shared utilities: settings validation and full-mesh verification.

pub mod validation;

pub use validation::{validate_settings, verify_full_mesh, MeshError, SettingsError};
