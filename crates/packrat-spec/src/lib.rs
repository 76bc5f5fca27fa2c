//! Component spec parsing and validation.
//!
//! This crate provides the data model for per-component YAML specs, the
//! sibling-file loader used by the packaging pipeline, and required-parameter
//! validation for documented examples.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{component_name, load_spec, spec_path};
pub use model::{ComponentSpec, Example, Param, SpecError};
pub use validate::validate_example;
