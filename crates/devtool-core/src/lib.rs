//! Devtool Core - Stateless text and data transformation engine
//!
//! This crate provides the pure transformation functions behind the Devtool
//! utilities: JSON formatting, Base64 and URL codecs, Unix timestamp
//! conversion, text statistics, and letter-case conversion.
//!
//! # Main Components
//!
//! - **Error Handling**: A single `thiserror` taxonomy whose `Display`
//!   output is the verbatim user-facing failure message
//! - **Transformers**: Six independent, pure modules under [`transform`]
//!
//! Every transformer is synchronous, deterministic, and free of shared
//! state; any call may safely run in parallel with any other. The only
//! external resource in the crate is the wall clock, read once per
//! [`transform::timestamp::now`] call.
//!
//! # Example
//!
//! ```
//! use devtool_core::transform::{case, case::CaseMode, json};
//!
//! fn example() -> devtool_core::Result<()> {
//!     let pretty = json::format(r#"{"a":1}"#)?;
//!     assert_eq!(pretty, "{\n  \"a\": 1\n}");
//!
//!     assert_eq!(case::convert("hello world", CaseMode::Pascal), "HelloWorld");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod transform;

// Re-export main types for convenience
pub use error::{Error, ErrorKind, Result};
pub use transform::{CaseMode, Snapshot, TextStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
