//! A single captured stack frame.

use crate::parser::symbol;
use serde::{Deserialize, Serialize};

/// Frame record as reported by the stack walker
///
/// **Public** - produced by [`crate::capture::StackWalker::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawFrame {
    /// Qualified function symbol (e.g., "example.com/sample/a.F.G.func1")
    pub function: String,

    /// Source file path
    pub file: String,

    /// 1-based line number, 0 when unknown
    pub line: u32,
}

impl RawFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}

/// One level of a captured call stack.
///
/// Wraps a [`RawFrame`] that is never mutated; every accessor is derived
/// from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    frame: RawFrame,
}

impl Frame {
    /// Build a frame directly from a raw record
    pub fn from_raw(frame: RawFrame) -> Self {
        Self { frame }
    }

    /// The underlying record, unmodified
    pub fn raw_frame(&self) -> &RawFrame {
        &self.frame
    }

    /// The qualified symbol as reported by the walker
    pub fn symbol(&self) -> &str {
        &self.frame.function
    }

    /// Function name without package path.
    ///
    /// `example.com/sample/a.F.G.func1` -> `F.G.func1`
    pub fn func_name(&self) -> &str {
        symbol::func_name(&self.frame.function)
    }

    /// Import path of the package owning the function.
    ///
    /// `example.com/sample/a.F.G.func1` -> `example.com/sample/a`
    pub fn pkg_path(&self) -> String {
        symbol::pkg_path(&self.frame.function)
    }

    /// Package name of the function.
    ///
    /// `example.com/sample/a.F.G.func1` -> `a`
    pub fn pkg_name(&self) -> &str {
        symbol::pkg_name(&self.frame.function)
    }

    pub fn file(&self) -> &str {
        &self.frame.file
    }

    pub fn line(&self) -> u32 {
        self.frame.line
    }
}

impl From<RawFrame> for Frame {
    fn from(frame: RawFrame) -> Self {
        Self::from_raw(frame)
    }
}
