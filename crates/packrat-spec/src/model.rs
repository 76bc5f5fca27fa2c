//! Component spec data model.

use serde::Deserialize;
use serde_yaml::Value;

/// A component's YAML spec.
///
/// `params` is kept as raw YAML so serializing it back preserves every key
/// and the authored ordering; validation works on the typed view from
/// [`ComponentSpec::typed_params`].
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSpec {
    /// Parameter schema, verbatim
    #[serde(default)]
    pub params: Option<Value>,

    /// Documented examples, in spec order
    #[serde(default)]
    pub examples: Option<Vec<Example>>,
}

/// A named sample input used to generate a fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    /// Example name
    pub name: String,

    /// Arbitrary key-value document matching the parameter schema
    #[serde(default)]
    pub data: Value,
}

/// Typed view of one parameter descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    /// Parameter name
    pub name: String,

    /// Declared type (`string`, `boolean`, `array`, ...)
    #[serde(default, rename = "type")]
    pub param_type: Option<String>,

    /// Whether every example must supply this parameter
    #[serde(default)]
    pub required: bool,

    /// Nested schema for array-typed parameters
    #[serde(default)]
    pub params: Option<Vec<Param>>,
}

impl ComponentSpec {
    /// Typed parameter list for validation.
    ///
    /// An absent `params` key validates as an empty schema. Descriptor keys
    /// outside the typed view (descriptions and the like) are ignored here
    /// but survive in the raw value.
    pub fn typed_params(&self) -> Result<Vec<Param>, SpecError> {
        match &self.params {
            Some(value) => Ok(serde_yaml::from_value(value.clone())?),
            None => Ok(Vec::new()),
        }
    }
}

/// Errors from spec loading and example validation.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("\"{component} -> {example}\" is not a valid example. \"{param}\" missing but marked as required.")]
    MissingRequired {
        component: String,
        example: String,
        param: String,
    },

    #[error("Invalid component YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}
