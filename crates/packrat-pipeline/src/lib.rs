//! Distribution packaging pipeline for a component library.
//!
//! Copies source assets into a distribution folder, vendor-prefixes SCSS
//! stylesheets, and converts per-component YAML specs into generated
//! `fixtures.json` and `macro-options.json` artifacts.

pub mod copier;
pub mod fixtures;
pub mod selector;
pub mod styles;
pub mod templates;

pub use copier::{CopyConfig, CopyError, CopyResult, Packager};
pub use fixtures::{
    generate_fixtures, generate_macro_options, to_json_pretty, Fixture, FixtureDoc, FixtureError,
};
pub use selector::source_files;
pub use styles::{prefix_styles, StyleError};
pub use templates::TemplateEngine;
