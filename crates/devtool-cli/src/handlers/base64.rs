//! Handler for the base64 command

use devtool_core::transform::base64;
use tracing::info;

use super::utils;
use crate::cli::{Base64Args, CodecAction};
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the base64 command
pub fn handle_base64(args: Base64Args, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        CodecAction::Encode(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(len = text.len(), "encoding to Base64");
            output.result(&base64::encode(&text)?)
        }
        CodecAction::Decode(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(len = text.len(), "decoding from Base64");
            output.result(&base64::decode(&text)?)
        }
    }
}
