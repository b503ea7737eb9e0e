//! Normalize demangled Rust paths into qualified symbols.
//!
//! The symbolizer reports names such as
//! `caller_trace::capture::BacktraceWalker::callers::{{closure}}`.
//! [`qualify`] rewrites them as `caller_trace/capture.BacktraceWalker.callers.{{closure}}`
//! so that [`super::symbol`] can split module path, package and function.
//!
//! Rust paths do not say where modules end and functions begin, so the
//! split is a heuristic: types (uppercase or `<...>` segments) and closures
//! mark the start of the function part, otherwise only the last segment is
//! the function. Free functions nested inside functions are reported as
//! modules.

use crate::utils::config::{PATH_SEPARATOR, SYMBOL_SEPARATOR};

const RUST_PATH_SEPARATOR: &str = "::";

/// Rewrite a demangled Rust path as a qualified symbol.
///
/// `a::b::Type::method::{{closure}}` -> `a/b.Type.method.{{closure}}`
pub fn qualify(path: &str) -> String {
    let mut segments = split_path(path);
    if segments.last().is_some_and(|s| is_hash(s)) {
        segments.pop();
    }
    if segments.is_empty() {
        return String::new();
    }

    let func_start = function_start(&segments);
    let (modules, function) = segments.split_at(func_start);

    let mut qualified = String::with_capacity(path.len());
    for (i, module) in modules.iter().enumerate() {
        qualified.push_str(module);
        if i + 1 < modules.len() {
            qualified.push(PATH_SEPARATOR);
        } else {
            qualified.push(SYMBOL_SEPARATOR);
        }
    }
    for (i, segment) in function.iter().enumerate() {
        if i > 0 {
            qualified.push(SYMBOL_SEPARATOR);
        }
        qualified.push_str(segment);
    }
    qualified
}

/// Split at `::` outside of angle brackets, so that
/// `<alloc::vec::Vec<T> as Drop>::drop` stays two segments and a
/// turbofish such as `run::<u32>` stays attached to its function.
fn split_path(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            // `run::<u32>` keeps its turbofish in the same segment
            b':' if depth == 0
                && path[i..].starts_with(RUST_PATH_SEPARATOR)
                && !path[i + RUST_PATH_SEPARATOR.len()..].starts_with('<') =>
            {
                segments.push(&path[start..i]);
                i += RUST_PATH_SEPARATOR.len();
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }
    segments
}

fn function_start(segments: &[&str]) -> usize {
    if let Some(idx) = segments.iter().position(|s| is_type_like(s)) {
        return idx;
    }
    if let Some(idx) = segments.iter().position(|s| is_closure(s)) {
        return idx.saturating_sub(1);
    }
    segments.len() - 1
}

fn is_type_like(segment: &str) -> bool {
    segment.starts_with('<') || segment.starts_with(|c: char| c.is_uppercase())
}

// `{{closure}}`, `{closure#0}`, `{shim:vtable#0}`
fn is_closure(segment: &str) -> bool {
    segment.starts_with('{')
}

// Legacy mangling appends `h` followed by 16 hex digits
fn is_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
