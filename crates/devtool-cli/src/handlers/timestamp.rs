//! Handler for the timestamp command

use devtool_core::transform::timestamp;
use tracing::info;

use super::utils;
use crate::cli::{TimestampAction, TimestampArgs};
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the timestamp command
pub fn handle_timestamp(args: TimestampArgs, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        TimestampAction::ToDate(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(input = %text, "converting timestamp to date");
            output.result(&timestamp::to_human(&text)?)
        }
        TimestampAction::ToUnix(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(input = %text, "converting date to timestamp");
            output.result(&timestamp::to_timestamp(&text)?)
        }
        TimestampAction::Now => {
            let snapshot = timestamp::now();
            output.snapshot(&snapshot)
        }
    }
}
