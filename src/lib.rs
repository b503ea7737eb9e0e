//! Caller Trace
//!
//! Call stack capture for diagnostics. A captured [`StackTrace`] exposes
//! per-frame file, line, function and package names, and renders through
//! format verbs so it can be dropped straight into templated log lines.
//!
//! ```
//! use caller_trace::{capture, render, FormatSpec, FormatVerb};
//!
//! let stack = capture(0);
//! let short = stack.with_spec(FormatSpec::short('s')).to_string(); // [lib.rs main.rs ...]
//! assert!(short.starts_with('['));
//!
//! if let Some(frame) = stack.first() {
//!     let line = render("%s:%d %+P.%n", frame);
//!     assert!(line.contains(':'));
//! }
//! ```
//!
//! The `caller-trace` binary wraps the same API for quick inspection:
//!
//! ```bash
//! caller-trace parse example.com/sample/a.F.G.func1
//! caller-trace capture --format %+v --lines
//! ```

pub mod capture;
pub mod commands;
pub mod format;
pub mod output;
pub mod parser;
pub mod trace;
pub mod utils;

pub use capture::{capture, capture_with, BacktraceWalker, StackWalker};
pub use format::{render, FormatSpec, FormatVerb, Formatted, Template, Verb};
pub use output::{FrameSummary, TraceReport};
pub use trace::{Frame, RawFrame, StackTrace};
