//! JSON formatting, minification, and validation
//!
//! Both operations run the input through a full `serde_json` parse, so they
//! double as validators: anything outside the JSON grammar (malformed
//! syntax, trailing content) is rejected before any output is produced.
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Pretty-print JSON text with 2-space indentation.
///
/// Idempotent on its own output: `format(format(x)?)? == format(x)?` for any
/// valid JSON `x`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidJson`] when the input is not valid JSON.
/// No partial output is produced on failure.
pub fn format(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    debug!(len = input.len(), "formatting JSON input");
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Serialize JSON text with all insignificant whitespace removed.
///
/// Same parse step and failure behavior as [`format`]; likewise idempotent
/// on its own output.
pub fn minify(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    debug!(len = input.len(), "minifying JSON input");
    Ok(serde_json::to_string(&value)?)
}
