//! Format-specifier driven rendering.
//!
//! This module converts frames and stack traces into text:
//! - `FormatSpec` parsing (`%s`, `%+P`, ...)
//! - Verb dispatch for `Frame` and `StackTrace`
//! - `Display` adapters and printf-style templates for log lines

pub mod render;
pub mod spec;

// Re-export main types and functions
pub use render::{render, FormatVerb, Formatted, Template};
pub use spec::{FormatSpec, Verb};
