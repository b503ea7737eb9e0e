//! Structured views of captured stacks.
//!
//! These are the shapes emitted to structured logs. Field names are
//! stable; `version` is bumped when they change.

use crate::trace::{Frame, StackTrace};
use crate::utils::config::REPORT_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One frame with every derived name spelled out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Qualified symbol as captured
    pub function: String,

    /// Function name without package path (e.g., "F.G.func1")
    pub func_name: String,

    /// Import path (e.g., "example.com/sample/a")
    pub pkg_path: String,

    /// Package name (e.g., "a")
    pub pkg_name: String,

    pub file: String,

    /// 1-based, 0 when unknown
    pub line: u32,
}

impl From<&Frame> for FrameSummary {
    fn from(frame: &Frame) -> Self {
        Self {
            function: frame.symbol().to_string(),
            func_name: frame.func_name().to_string(),
            pkg_path: frame.pkg_path(),
            pkg_name: frame.pkg_name().to_string(),
            file: frame.file().to_string(),
            line: frame.line(),
        }
    }
}

/// Top-level report for a captured stack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// When the report was built
    pub captured_at: DateTime<Utc>,

    /// Frames, innermost first
    pub frames: Vec<FrameSummary>,
}

impl TraceReport {
    /// Build a report stamped with the current time
    pub fn new(stack: &StackTrace) -> Self {
        Self::at(stack, Utc::now())
    }

    pub fn at(stack: &StackTrace, captured_at: DateTime<Utc>) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            captured_at,
            frames: stack.iter().map(FrameSummary::from).collect(),
        }
    }
}
