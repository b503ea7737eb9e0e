//! Capture command implementation.
//!
//! Records the CLI's own call stack and prints it:
//! 1. Captures the stack with the requested skip
//! 2. Renders it with a format specifier, as `at` lines, or as a JSON report

use crate::capture::capture;
use crate::format::{FormatSpec, FormatVerb};
use crate::output::{format_multiline, to_json, TraceReport};
use crate::trace::StackTrace;
use crate::utils::config::DEFAULT_FORMAT;
use anyhow::{Context, Result};
use log::info;

/// How the captured stack should be printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutput {
    /// Single line, e.g. `[a.go:10 b.go:11]`
    Spec(FormatSpec),
    /// One `at` line per frame
    Lines { long: bool },
    /// Pretty-printed JSON report
    Json,
}

/// Arguments for the capture command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureArgs {
    /// Frames to omit above the command itself
    pub skip: usize,

    pub output: CaptureOutput,
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            skip: 0,
            output: CaptureOutput::Spec(FormatSpec::default()),
        }
    }
}

impl CaptureArgs {
    /// Build args from raw CLI values
    ///
    /// # Errors
    /// * malformed format specifier
    pub fn from_cli(skip: usize, format: Option<&str>, lines: bool, json: bool) -> Result<Self> {
        let output = if json {
            CaptureOutput::Json
        } else {
            let spec = FormatSpec::parse(format.unwrap_or(DEFAULT_FORMAT))
                .context("Invalid --format specifier")?;
            if lines {
                CaptureOutput::Lines { long: spec.long }
            } else {
                CaptureOutput::Spec(spec)
            }
        };

        Ok(Self { skip, output })
    }
}

/// Execute the capture command, returning the text to print
#[inline(never)]
pub fn execute_capture(args: &CaptureArgs) -> Result<String> {
    let stack = capture(args.skip);

    info!("Captured {} frames", stack.len());

    render_stack(&stack, &args.output)
}

/// Render a captured stack for printing
pub fn render_stack(stack: &StackTrace, output: &CaptureOutput) -> Result<String> {
    match output {
        CaptureOutput::Spec(spec) => Ok(stack.with_spec(*spec).to_string()),
        CaptureOutput::Lines { long } => Ok(format_multiline(stack, *long)),
        CaptureOutput::Json => {
            to_json(&TraceReport::new(stack), true).context("Failed to build trace report")
        }
    }
}
