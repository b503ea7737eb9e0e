//! Output for captured stacks.
//!
//! This module turns stacks into:
//! - Structured reports (serde, JSON)
//! - Multi-line text for humans

pub mod json;
pub mod schema;
pub mod text;

// Re-export main types and functions
pub use json::to_json;
pub use schema::{FrameSummary, TraceReport};
pub use text::format_multiline;
