//! Multi-line text rendering, one frame per line.
//!
//! ```text
//!     at F.G.func1 (example.com/sample/a) a.go:10
//!     at main (example.com/sample) main.go:3
//! ```

use crate::format::{FormatSpec, FormatVerb};
use crate::trace::StackTrace;
use std::fmt::Write;

/// Render a stack with one indented `at` line per frame.
///
/// `long` switches file names and packages to full paths.
pub fn format_multiline(stack: &StackTrace, long: bool) -> String {
    let mut out = String::new();
    for frame in stack {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "    at {} ({}) {}",
            frame.with_spec(FormatSpec::short('n')),
            frame.with_spec(FormatSpec::new('P', true)),
            frame.with_spec(FormatSpec::new('v', long)),
        );
    }
    out
}
