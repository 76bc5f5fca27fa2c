//! Spec validation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use packrat_spec::{load_spec, validate_example};

use crate::commands::copy::load_config;

/// Run the check command: validate every component's spec and examples
/// without writing any output. Fails on the first error the copy pipeline
/// would treat as fatal.
pub async fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;
    let components_dir = PathBuf::from(&file_config.paths.components);

    if !components_dir.exists() {
        anyhow::bail!(
            "Components directory not found: {}",
            components_dir.display()
        );
    }

    let mut checked = 0;
    let mut skipped = 0;

    for entry in fs::read_dir(&components_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(component) = entry.file_name().to_str().map(String::from) else {
            continue;
        };

        let Some(spec) = load_spec(&components_dir, &component)? else {
            skipped += 1;
            continue;
        };

        let params = spec.typed_params()?;
        for example in spec.examples.as_deref().unwrap_or_default() {
            validate_example(&component, &example.name, &example.data, &params)?;
        }

        checked += 1;
    }

    tracing::info!("Checked {} components ({} without a spec)", checked, skipped);

    Ok(())
}
