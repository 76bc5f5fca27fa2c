//! Distribution copy pipeline.
//!
//! Walks the source tree once and dispatches each file on its extension:
//! SCSS is vendor-prefixed, component YAML is consumed and replaced by its
//! generated JSON artifacts, and everything else is copied through byte
//! for byte.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use packrat_spec::component_name;

use crate::fixtures::{generate_fixtures, generate_macro_options, FixtureError};
use crate::selector::source_files;
use crate::styles::{prefix_styles, StyleError};
use crate::templates::TemplateEngine;

/// Configuration for a distribution copy.
#[derive(Debug, Clone)]
pub struct CopyConfig {
    /// Source tree root
    pub src_dir: PathBuf,

    /// Components root (under `src_dir`)
    pub components_dir: PathBuf,

    /// Destination root, supplied externally
    pub destination: PathBuf,

    /// Fixed subpath under the destination
    pub subdir: String,

    /// Template entry point filename per component
    pub template_name: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            components_dir: PathBuf::from("src/components"),
            destination: PathBuf::from("dist"),
            subdir: "package".to_string(),
            template_name: "template.njk".to_string(),
        }
    }
}

/// Result of a copy run.
#[derive(Debug)]
pub struct CopyResult {
    /// Files copied through unchanged
    pub copied: usize,

    /// Stylesheets rewritten with vendor prefixes
    pub prefixed: usize,

    /// `fixtures.json` artifacts generated
    pub fixtures: usize,

    /// `macro-options.json` artifacts generated
    pub macro_options: usize,

    /// Total copy time in milliseconds
    pub duration_ms: u64,

    /// Root the distribution was written under
    pub output_dir: PathBuf,
}

/// Errors that can occur during the copy.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Failed to read source: {0}")]
    ReadError(String),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Copies a component library's sources into a distribution folder.
pub struct Packager {
    config: CopyConfig,
    templates: TemplateEngine,
}

impl Packager {
    /// Create a new packager.
    pub fn new(config: CopyConfig) -> Self {
        let templates = TemplateEngine::new(&config.components_dir);

        Self { config, templates }
    }

    /// Run the copy pipeline.
    pub async fn copy(&self) -> Result<CopyResult, CopyError> {
        let start = Instant::now();

        if !self.config.src_dir.exists() {
            return Err(CopyError::ReadError(format!(
                "Source directory not found: {}",
                self.config.src_dir.display()
            )));
        }

        let output_dir = self.config.destination.join(&self.config.subdir);
        fs::create_dir_all(&output_dir).map_err(|e| CopyError::WriteError(e.to_string()))?;

        let mut result = CopyResult {
            copied: 0,
            prefixed: 0,
            fixtures: 0,
            macro_options: 0,
            duration_ms: 0,
            output_dir: output_dir.clone(),
        };

        for path in source_files(&self.config.src_dir) {
            let relative = path
                .strip_prefix(&self.config.src_dir)
                .unwrap_or(&path)
                .to_path_buf();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

            match ext {
                "scss" => {
                    let source = fs::read_to_string(&path).map_err(|e| {
                        CopyError::ReadError(format!("{}: {}", path.display(), e))
                    })?;
                    let prefixed = prefix_styles(&path.display().to_string(), &source)?;
                    self.write(&output_dir.join(&relative), prefixed.as_bytes())?;
                    result.prefixed += 1;
                }
                "yaml" if path.starts_with(&self.config.components_dir) => {
                    // The spec file itself is consumed; only its generated
                    // artifacts reach the distribution.
                    let Some(component) = component_name(&path) else {
                        continue;
                    };
                    let dir = relative.parent().unwrap_or(Path::new(""));

                    if let Some(contents) = generate_fixtures(
                        &self.config.components_dir,
                        &component,
                        &self.templates,
                        &self.config.template_name,
                    )? {
                        self.write(&output_dir.join(dir).join("fixtures.json"), &contents)?;
                        result.fixtures += 1;
                    }

                    if let Some(contents) =
                        generate_macro_options(&self.config.components_dir, &component)?
                    {
                        self.write(&output_dir.join(dir).join("macro-options.json"), &contents)?;
                        result.macro_options += 1;
                    }
                }
                _ => {
                    let contents = fs::read(&path).map_err(|e| {
                        CopyError::ReadError(format!("{}: {}", path.display(), e))
                    })?;
                    self.write(&output_dir.join(&relative), &contents)?;
                    result.copied += 1;
                }
            }
        }

        result.duration_ms = start.elapsed().as_millis() as u64;

        Ok(result)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), CopyError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CopyError::WriteError(e.to_string()))?;
        }
        fs::write(path, contents).map_err(|e| CopyError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BUTTON_SPEC: &str = "params:\n  - name: text\n    required: true\nexamples:\n  - name: default\n    data:\n      text: Hi\n";

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn sample_config(root: &Path) -> CopyConfig {
        let src = root.join("src");
        write(&src.join("core/_base.scss"), ".selectable {\n  user-select: none;\n}\n");
        write(&src.join("components/button/button.yaml"), BUTTON_SPEC);
        write(&src.join("components/button/template.njk"), "{{ params.text }}");
        write(&src.join("components/button/button.mjs"), "export default 1\n");
        write(&src.join("README.md"), "source readme\n");
        write(&src.join("components/button/__snapshots__/button.snap"), "snap\n");

        CopyConfig {
            src_dir: src.clone(),
            components_dir: src.join("components"),
            destination: root.join("dist"),
            subdir: "package".to_string(),
            template_name: "template.njk".to_string(),
        }
    }

    #[tokio::test]
    async fn copies_and_generates_distribution() {
        let temp = tempdir().unwrap();
        let config = sample_config(temp.path());

        let result = Packager::new(config).copy().await.unwrap();

        let out = temp.path().join("dist/package");
        let css = fs::read_to_string(out.join("core/_base.scss")).unwrap();
        assert!(css.contains("-webkit-user-select"));

        let fixtures = fs::read_to_string(out.join("components/button/fixtures.json")).unwrap();
        assert!(fixtures.contains("\"component\": \"button\""));
        assert!(fixtures.contains("\"html\": \"Hi\""));

        assert!(out.join("components/button/macro-options.json").exists());
        assert!(out.join("components/button/button.mjs").exists());

        // Consumed and excluded inputs never reach the distribution
        assert!(!out.join("components/button/button.yaml").exists());
        assert!(!out.join("README.md").exists());
        assert!(!out.join("components/button/__snapshots__").exists());

        assert_eq!(result.prefixed, 1);
        assert_eq!(result.fixtures, 1);
        assert_eq!(result.macro_options, 1);
        // template.njk and button.mjs
        assert_eq!(result.copied, 2);
    }

    #[tokio::test]
    async fn rerun_is_idempotent() {
        let temp = tempdir().unwrap();
        let config = sample_config(temp.path());
        let packager = Packager::new(config);
        let out = temp.path().join("dist/package");

        packager.copy().await.unwrap();
        let first_fixtures = fs::read(out.join("components/button/fixtures.json")).unwrap();
        let first_css = fs::read(out.join("core/_base.scss")).unwrap();

        packager.copy().await.unwrap();
        let second_fixtures = fs::read(out.join("components/button/fixtures.json")).unwrap();
        let second_css = fs::read(out.join("core/_base.scss")).unwrap();

        assert_eq!(first_fixtures, second_fixtures);
        assert_eq!(first_css, second_css);
    }

    #[tokio::test]
    async fn yaml_outside_components_is_copied_through() {
        let temp = tempdir().unwrap();
        let config = sample_config(temp.path());
        write(
            &config.src_dir.join("config/settings.yaml"),
            "theme: default\n",
        );

        Packager::new(config).copy().await.unwrap();

        let out = temp.path().join("dist/package");
        let copied = fs::read_to_string(out.join("config/settings.yaml")).unwrap();
        assert_eq!(copied, "theme: default\n");
    }

    #[tokio::test]
    async fn component_without_spec_degrades_quietly() {
        let temp = tempdir().unwrap();
        let config = sample_config(temp.path());
        // A stray yaml in a directory with no matching <dir>.yaml spec
        write(
            &config.src_dir.join("components/header/nav.yaml"),
            "examples: []\n",
        );

        let result = Packager::new(config).copy().await.unwrap();

        let out = temp.path().join("dist/package");
        assert!(!out.join("components/header/fixtures.json").exists());
        // The button component still packaged fine
        assert_eq!(result.fixtures, 1);
    }

    #[tokio::test]
    async fn missing_source_dir_is_an_error() {
        let temp = tempdir().unwrap();
        let config = CopyConfig {
            src_dir: temp.path().join("nope"),
            destination: temp.path().join("dist"),
            ..CopyConfig::default()
        };

        let result = Packager::new(config).copy().await;

        assert!(matches!(result, Err(CopyError::ReadError(_))));
    }
}
