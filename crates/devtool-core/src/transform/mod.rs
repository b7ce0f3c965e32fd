//! Transformation engine: the six stateless text/data utilities
//!
//! Each submodule is an independent, pure transformer. None of them share
//! state or depend on one another; every function maps an input string (plus,
//! for case conversion, a mode selector) to an output string or a typed
//! [`crate::Error`].
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

pub mod base64;
pub mod case;
pub mod json;
pub mod stats;
pub mod timestamp;
pub mod url;

pub use case::CaseMode;
pub use stats::TextStats;
pub use timestamp::Snapshot;
