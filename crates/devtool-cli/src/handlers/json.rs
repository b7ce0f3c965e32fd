//! Handler for the json command

use devtool_core::transform::json;
use tracing::info;

use super::utils;
use crate::cli::{JsonAction, JsonArgs};
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the json command
pub fn handle_json(args: JsonArgs, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        JsonAction::Format(input) => {
            let text = utils::read_input(&input)?;
            info!(len = text.len(), "formatting JSON");
            output.result(&json::format(&text)?)
        }
        JsonAction::Minify(input) => {
            let text = utils::read_input(&input)?;
            info!(len = text.len(), "minifying JSON");
            output.result(&json::minify(&text)?)
        }
    }
}
