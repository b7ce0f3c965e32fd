//! Handler for the stats command

use devtool_core::transform::stats;
use tracing::info;

use super::utils;
use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the stats command
pub fn handle_stats(args: InputArgs, output: &mut OutputWriter) -> Result<()> {
    // Statistics are computed over the input exactly as provided: a trailing
    // newline is part of the text and affects the line count.
    let text = utils::read_input(&args)?;
    info!(len = text.len(), "computing text statistics");
    output.stats(&stats::analyze(&text))
}
