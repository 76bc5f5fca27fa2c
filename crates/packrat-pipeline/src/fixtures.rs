//! Generated JSON artifacts: example fixtures and the macro-options schema.
//!
//! Both generators re-read the sibling `<component>.yaml` independently, so
//! each can be skipped on its own when the spec lacks the key it needs.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use packrat_spec::{load_spec, spec_path, validate_example, SpecError};

use crate::templates::TemplateEngine;

/// The fixtures document written per component.
#[derive(Debug, Serialize)]
pub struct FixtureDoc {
    /// Component name
    pub component: String,

    /// One entry per documented example, in spec order
    pub fixtures: Vec<Fixture>,
}

/// One rendered example.
#[derive(Debug, Serialize)]
pub struct Fixture {
    /// Example name
    pub name: String,

    /// The example's input data, verbatim
    pub options: serde_yaml::Value,

    /// Rendered markup
    pub html: String,
}

/// Errors from artifact generation.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Failed to render template for {component}: {message}")]
    Template { component: String, message: String },

    #[error("Failed to serialize output for {component}: {message}")]
    Serialize { component: String, message: String },
}

/// Serialize with the 4-space indentation the generated artifacts use.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Build the `fixtures.json` contents for one component.
///
/// Returns `Ok(None)` (after a diagnostic) when the component's spec is
/// missing or documents no examples. A missing required parameter in any
/// example is an error that aborts the whole run.
pub fn generate_fixtures(
    components_dir: &Path,
    component: &str,
    templates: &TemplateEngine,
    template_name: &str,
) -> Result<Option<Vec<u8>>, FixtureError> {
    let Some(spec) = load_spec(components_dir, component)? else {
        return Ok(None);
    };

    let Some(examples) = &spec.examples else {
        tracing::error!(
            "{} is missing \"examples\"",
            spec_path(components_dir, component).display()
        );
        return Ok(None);
    };

    let params = spec.typed_params()?;

    let mut doc = FixtureDoc {
        component: component.to_string(),
        fixtures: Vec::with_capacity(examples.len()),
    };

    for example in examples {
        validate_example(component, &example.name, &example.data, &params)?;

        let html = templates
            .render(component, template_name, &example.data)
            .map_err(|e| FixtureError::Template {
                component: component.to_string(),
                message: e.to_string(),
            })?;

        doc.fixtures.push(Fixture {
            name: example.name.clone(),
            options: example.data.clone(),
            html,
        });
    }

    to_json_pretty(&doc)
        .map(Some)
        .map_err(|e| FixtureError::Serialize {
            component: component.to_string(),
            message: e.to_string(),
        })
}

/// Build the `macro-options.json` contents for one component: the spec's
/// raw `params` list, keys and ordering preserved as authored.
pub fn generate_macro_options(
    components_dir: &Path,
    component: &str,
) -> Result<Option<Vec<u8>>, FixtureError> {
    let Some(spec) = load_spec(components_dir, component)? else {
        return Ok(None);
    };

    let Some(params) = &spec.params else {
        tracing::error!(
            "{} is missing \"params\"",
            spec_path(components_dir, component).display()
        );
        return Ok(None);
    };

    to_json_pretty(params)
        .map(Some)
        .map_err(|e| FixtureError::Serialize {
            component: component.to_string(),
            message: e.to_string(),
        })
}
