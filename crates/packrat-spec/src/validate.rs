//! Required-parameter validation for documented examples.

use serde_yaml::Value;

use crate::model::{Param, SpecError};

/// Parameters whose names end in these suffixes carry caller-supplied
/// markup and are exempt from the required check.
const EXEMPT_SUFFIXES: [&str; 2] = ["html", "text"];

/// Validate one example's data against a parameter schema.
///
/// Every `required` parameter must be present in `data`; presence is an
/// explicit key lookup and an explicit `null` counts as absent. Array-typed
/// parameters with a nested schema are validated per element, with the
/// element index appended to the example label so an error for element `i`
/// reads `example.param[i]`.
pub fn validate_example(
    component: &str,
    example: &str,
    data: &Value,
    params: &[Param],
) -> Result<(), SpecError> {
    for param in params {
        if EXEMPT_SUFFIXES.iter().any(|s| param.name.ends_with(s)) {
            continue;
        }

        let value = match data.get(param.name.as_str()) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };

        if param.required && value.is_none() {
            return Err(SpecError::MissingRequired {
                component: component.to_string(),
                example: example.to_string(),
                param: param.name.clone(),
            });
        }

        if param.param_type.as_deref() == Some("array") {
            if let (Some(nested), Some(Value::Sequence(items))) = (&param.params, value) {
                for (index, item) in items.iter().enumerate() {
                    let label = format!("{example}.{}[{index}]", param.name);
                    validate_example(component, &label, item, nested)?;
                }
            }
        }
    }

    Ok(())
}
