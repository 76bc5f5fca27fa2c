//! Sibling spec file resolution and loading.
//!
//! A component's spec lives next to its template as `<component>.yaml`, where
//! the component name is the record's parent directory name. The loader
//! resolves that path from the components root rather than trusting the
//! record's own contents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ComponentSpec, SpecError};

/// Derive the component name from a file's parent directory.
pub fn component_name(path: &Path) -> Option<String> {
    path.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}

/// Path of a component's spec file under the components root.
pub fn spec_path(components_dir: &Path, component: &str) -> PathBuf {
    components_dir
        .join(component)
        .join(format!("{component}.yaml"))
}

/// Load a component's spec.
///
/// A missing or unreadable file is tolerated: a diagnostic is logged and
/// `Ok(None)` is returned so the pipeline continues with other files. YAML
/// that fails to parse is an error and propagates.
pub fn load_spec(
    components_dir: &Path,
    component: &str,
) -> Result<Option<ComponentSpec>, SpecError> {
    let path = spec_path(components_dir, component);

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    let spec: ComponentSpec = serde_yaml::from_str(&source)?;
    Ok(Some(spec))
}
