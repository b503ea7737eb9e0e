//! Configuration and constants shared by capture, parsing and rendering.

/// Capacity of the scratch buffer used while walking the stack.
/// Deeper stacks are truncated to this many program counters.
pub const MAX_STACK_DEPTH: usize = 32;

/// Current structured report schema version
pub const REPORT_VERSION: &str = "1.0.0";

// Format specifier grammar: `%` [`+`] verb
pub const VERB_PREFIX: char = '%';
pub const LONG_FLAG: char = '+';

/// Specifier used when the caller does not pick one
pub const DEFAULT_FORMAT: &str = "%v";

// Qualified symbol layout: <module-path>/<pkg>.<Func>.<closure>
pub const PATH_SEPARATOR: char = '/';
pub const SYMBOL_SEPARATOR: char = '.';

/// Every verb the renderer understands, with a short description and an
/// example rendering of `example.com/sample/a.F.G.func1` at `a/a.go:10`.
pub const VERB_TABLE: &[(&str, &str, &str)] = &[
    ("%s", "file name", "a.go"),
    ("%+s", "file path", "example.com/sample/a/a.go"),
    ("%d", "line number", "10"),
    ("%n", "function name", "F.G.func1"),
    ("%P", "package name", "a"),
    ("%+P", "import path", "example.com/sample/a"),
    ("%v", "file:line", "a.go:10"),
];
