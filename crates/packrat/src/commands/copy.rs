//! Distribution copy command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use packrat_pipeline::{CopyConfig, Packager};
use serde::Deserialize;

/// Configuration file structure (packrat.toml).
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PathsConfig {
    #[serde(default = "default_src")]
    pub src: String,
    #[serde(default = "default_components")]
    pub components: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComponentsConfig {
    #[serde(default = "default_template")]
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutputConfig {
    #[serde(default = "default_subdir")]
    pub subdir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src: default_src(),
            components: default_components(),
        }
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            subdir: default_subdir(),
        }
    }
}

fn default_src() -> String {
    "src".to_string()
}
fn default_components() -> String {
    "src/components".to_string()
}
fn default_template() -> String {
    "template.njk".to_string()
}
fn default_subdir() -> String {
    "package".to_string()
}

/// Load configuration from packrat.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub(crate) fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the copy command.
pub async fn run(config_path: &Path, destination: PathBuf) -> Result<()> {
    tracing::info!("Copying distribution files...");

    let file_config = load_config(config_path)?;

    let config = CopyConfig {
        src_dir: PathBuf::from(&file_config.paths.src),
        components_dir: PathBuf::from(&file_config.paths.components),
        destination,
        subdir: file_config.output.subdir,
        template_name: file_config.components.template,
    };

    let result = Packager::new(config).copy().await?;

    tracing::info!(
        "Copied {} files, prefixed {} stylesheets, generated {} fixture and {} macro-option documents in {}ms",
        result.copied,
        result.prefixed,
        result.fixtures,
        result.macro_options,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
