//! Handler for the case command

use devtool_core::transform::case;
use tracing::info;

use super::utils;
use crate::cli::CaseArgs;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the case command
pub fn handle_case(args: CaseArgs, output: &mut OutputWriter) -> Result<()> {
    let text = utils::read_input_trimmed(&args.input)?;
    let mode = devtool_core::CaseMode::from(args.mode);
    info!(%mode, len = text.len(), "converting case");
    output.result(&case::convert(&text, mode))
}
