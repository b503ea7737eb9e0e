//! Split qualified function symbols into package and function parts.
//!
//! A qualified symbol looks like `example.com/sample/a.F.G.func1`:
//! everything up to the last `/` is the module path, the first `.`-segment
//! after it is the package name, and the rest is the local function path
//! (methods, nested functions and closures stay joined by `.`).
//!
//! None of these functions fail. Symbols without a `/` or a `.` fall back
//! to bare-function defaults.

use crate::utils::config::{PATH_SEPARATOR, SYMBOL_SEPARATOR};

/// Function name without its package path.
///
/// `example.com/sample/a.F.G.func1` -> `F.G.func1`
///
/// When there is no `.` after the last `/` the symbol names a bare
/// function and the qualified tail is returned as is, leading `/` included.
pub fn func_name(symbol: &str) -> &str {
    let qualified = match symbol.rfind(PATH_SEPARATOR) {
        Some(idx) => &symbol[idx..],
        None => symbol,
    };

    match qualified.split_once(SYMBOL_SEPARATOR) {
        Some((_, funcname)) => funcname,
        None => qualified,
    }
}

/// Import path of the package owning the function.
///
/// `example.com/sample/a.F.G.func1` -> `example.com/sample/a`
///
/// The package segment keeps the `/` it was cut at, so the module prefix
/// and the segment are concatenated without inserting a separator.
pub fn pkg_path(symbol: &str) -> String {
    let (prefix, qualified) = match symbol.rfind(PATH_SEPARATOR) {
        Some(idx) => symbol.split_at(idx),
        None => ("", symbol),
    };

    match qualified.split_once(SYMBOL_SEPARATOR) {
        Some((pkgname, _)) => format!("{}{}", prefix, pkgname),
        None => prefix.to_string(),
    }
}

/// Short package name of the function.
///
/// `example.com/sample/a.F.G.func1` -> `a`
pub fn pkg_name(symbol: &str) -> &str {
    let qualified = match symbol.rfind(PATH_SEPARATOR) {
        Some(idx) => &symbol[idx + PATH_SEPARATOR.len_utf8()..],
        None => symbol,
    };

    match qualified.split_once(SYMBOL_SEPARATOR) {
        Some((pkgname, _)) => pkgname,
        None => "",
    }
}
