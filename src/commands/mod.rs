//! CLI command implementations.
//!
//! Each command is implemented in its own module and returns the text to
//! print, leaving stdout to main.rs.

pub mod capture;
pub mod parse;
pub mod utils;

// Re-export main command functions
pub use capture::{execute_capture, CaptureArgs, CaptureOutput};
pub use parse::{execute_parse, ParseArgs};
pub use utils::{display_verbs, display_version};
