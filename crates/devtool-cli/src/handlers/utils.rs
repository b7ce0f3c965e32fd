//! Shared input resolution for the handlers
//!
//! Resolution order: inline argument, then `--file`, then stdin.

use std::fs;
use std::io::Read;

use tracing::debug;

use crate::cli::InputArgs;
use crate::error::{Error, Result};

/// Read the input exactly as provided.
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.input {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            return Err(Error::FileNotFound { path: path.clone() });
        }
        debug!(path = %path.display(), "reading input file");
        return Ok(fs::read_to_string(path)?);
    }

    debug!("reading input from stdin");
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Read the input with at most one trailing line break removed.
///
/// Shell pipelines and text files terminate their payload with a newline
/// that is not part of the value being transformed; the codecs and the
/// timestamp/case commands want it gone. Only one line break is stripped,
/// so genuinely multi-line input is preserved.
pub fn read_input_trimmed(args: &InputArgs) -> Result<String> {
    let mut input = read_input(args)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
