//! Handler for the url command

use devtool_core::transform::url;
use tracing::info;

use super::utils;
use crate::cli::{CodecAction, UrlArgs};
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the url command
pub fn handle_url(args: UrlArgs, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        CodecAction::Encode(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(len = text.len(), "percent-encoding URL component");
            output.result(&url::encode(&text))
        }
        CodecAction::Decode(input) => {
            let text = utils::read_input_trimmed(&input)?;
            info!(len = text.len(), "percent-decoding URL component");
            output.result(&url::decode(&text)?)
        }
    }
}
