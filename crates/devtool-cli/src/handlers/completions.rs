//! Handler for the completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(
        args.shell.to_clap_shell(),
        &mut command,
        "devtool",
        &mut std::io::stdout(),
    );
    Ok(())
}
