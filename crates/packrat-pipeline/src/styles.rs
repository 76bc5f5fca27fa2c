//! Vendor-prefix post-processing for stylesheets.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};

/// Errors from the style transform.
#[derive(Debug, thiserror::Error)]
#[error("Failed to process {path}: {message}")]
pub struct StyleError {
    /// Source file the transform was applied to
    pub path: String,
    /// Underlying processor message
    pub message: String,
}

// Browser floor the distribution supports; drives prefix insertion.
fn browser_targets() -> Targets {
    Targets::from(Browsers {
        chrome: Some(55 << 16),
        edge: Some(15 << 16),
        firefox: Some(52 << 16),
        ie: Some(11 << 16),
        ios_saf: Some(9 << 16),
        safari: Some(9 << 16),
        ..Browsers::default()
    })
}

/// Rewrite a stylesheet with vendor prefixes for the supported browsers.
///
/// Output is printed un-minified so the distributed sources stay readable.
/// Malformed input is an error; the caller treats it as fatal.
pub fn prefix_styles(path: &str, source: &str) -> Result<String, StyleError> {
    let fail = |message: String| StyleError {
        path: path.to_string(),
        message,
    };

    let mut stylesheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: path.to_string(),
            ..ParserOptions::default()
        },
    )
    .map_err(|e| fail(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions {
            targets: browser_targets(),
            ..MinifyOptions::default()
        })
        .map_err(|e| fail(e.to_string()))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: false,
            targets: browser_targets(),
            ..PrinterOptions::default()
        })
        .map_err(|e| fail(e.to_string()))?;

    Ok(output.code)
}
