//! Command handlers for CLI subcommands
//!
//! Each handler resolves its input (inline argument, file, or stdin),
//! invokes the corresponding devtool-core transformer, and writes the
//! result through the output writer.

mod base64;
mod case;
mod completions;
mod json;
mod stats;
mod timestamp;
mod url;
mod utils;

pub use base64::handle_base64;
pub use case::handle_case;
pub use completions::handle_completions;
pub use json::handle_json;
pub use stats::handle_stats;
pub use timestamp::handle_timestamp;
pub use url::handle_url;
