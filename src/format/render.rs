//! Verb-dispatch rendering of frames and stack traces.
//!
//! | verb  | output                  | example                     |
//! |-------|-------------------------|-----------------------------|
//! | `%s`  | file name               | `a.go`                      |
//! | `%+s` | file path               | `example.com/sample/a/a.go` |
//! | `%d`  | line number             | `10`                        |
//! | `%n`  | function name           | `F.G.func1`                 |
//! | `%P`  | package name            | `a`                         |
//! | `%+P` | import path             | `example.com/sample/a`      |
//! | `%v`  | file:line               | `a.go:10`                   |
//!
//! Stacks render as `[` frames joined by a space `]`. Unknown verbs write
//! nothing and never abort the rest of the output.

use super::spec::{FormatSpec, Verb};
use crate::trace::{Frame, StackTrace};
use crate::utils::config::{LONG_FLAG, VERB_PREFIX};
use std::fmt::{self, Write};
use std::path::MAIN_SEPARATOR;

/// Anything that can be rendered under a [`FormatSpec`].
pub trait FormatVerb {
    fn format_verb(&self, w: &mut dyn Write, spec: FormatSpec) -> fmt::Result;

    /// Adapter implementing `Display` for a fixed specifier,
    /// e.g. `format!("{}", stack.with_spec(FormatSpec::long('s')))`
    fn with_spec(&self, spec: FormatSpec) -> Formatted<'_, Self> {
        Formatted { value: self, spec }
    }
}

impl FormatVerb for Frame {
    fn format_verb(&self, w: &mut dyn Write, spec: FormatSpec) -> fmt::Result {
        match (spec.verb, spec.long) {
            (Verb::File, true) => w.write_str(self.file()),
            (Verb::File, false) => w.write_str(base_name(self.file())),
            (Verb::Line, _) => write!(w, "{}", self.line()),
            (Verb::FuncName, _) => w.write_str(self.func_name()),
            (Verb::Package, true) => w.write_str(&self.pkg_path()),
            (Verb::Package, false) => w.write_str(self.pkg_name()),
            (Verb::Location, _) => {
                // The flag carries over, so `%+v` prints the full path
                self.format_verb(w, spec.with_verb(Verb::File))?;
                w.write_char(':')?;
                self.format_verb(w, spec.with_verb(Verb::Line))
            }
            (Verb::Unknown(_), _) => Ok(()),
        }
    }
}

impl FormatVerb for StackTrace {
    fn format_verb(&self, w: &mut dyn Write, spec: FormatSpec) -> fmt::Result {
        w.write_char('[')?;
        for (i, frame) in self.iter().enumerate() {
            if i > 0 {
                w.write_char(' ')?;
            }
            frame.format_verb(w, spec)?;
        }
        w.write_char(']')
    }
}

impl<T: FormatVerb + ?Sized> FormatVerb for &T {
    fn format_verb(&self, w: &mut dyn Write, spec: FormatSpec) -> fmt::Result {
        (**self).format_verb(w, spec)
    }
}

/// A value paired with the specifier it should be displayed with
pub struct Formatted<'a, T: ?Sized> {
    value: &'a T,
    spec: FormatSpec,
}

impl<T: FormatVerb + ?Sized> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.format_verb(f, self.spec)
    }
}

/// `{}` renders as `%v`, `{:#}` as `%+v`
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let long = f.alternate();
        self.format_verb(f, FormatSpec::new('v', long))
    }
}

/// `{}` renders as `%v`, `{:#}` as `%+v`
impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let long = f.alternate();
        self.format_verb(f, FormatSpec::new('v', long))
    }
}

/// A printf-style template applied to a single value
///
/// Every `%[+]verb` directive renders the value, `%%` (or `%+%`) is a
/// literal `%` and a dangling `%` at the end is written as is.
pub struct Template<'a, T: ?Sized> {
    template: &'a str,
    value: &'a T,
}

impl<'a, T: FormatVerb + ?Sized> Template<'a, T> {
    pub fn new(template: &'a str, value: &'a T) -> Self {
        Self { template, value }
    }
}

impl<T: FormatVerb + ?Sized> fmt::Display for Template<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.template.chars();
        while let Some(c) = chars.next() {
            if c != VERB_PREFIX {
                f.write_char(c)?;
                continue;
            }

            let mut verb = chars.next();
            let long = verb == Some(LONG_FLAG);
            if long {
                verb = chars.next();
            }

            match verb {
                Some(VERB_PREFIX) => f.write_char(VERB_PREFIX)?,
                Some(verb) => self.value.format_verb(f, FormatSpec::new(verb, long))?,
                None => {
                    f.write_char(VERB_PREFIX)?;
                    if long {
                        f.write_char(LONG_FLAG)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Expand a template such as `"%s:%d %+P.%n"` against a frame or stack
pub fn render<T: FormatVerb + ?Sized>(template: &str, value: &T) -> String {
    Template::new(template, value).to_string()
}

/// Final path element.
///
/// `/` always separates; on Windows `\\` does too. An empty path is `.`,
/// a path made only of separators is the root.
fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // Separators are ASCII
        return &path[..1];
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RawFrame;

    fn frame() -> Frame {
        Frame::from_raw(RawFrame::new(
            "example.com/sample/a.F.G.func1",
            "example.com/sample/a/a.go",
            10,
        ))
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("example.com/sample/a/a.go"), "a.go");
        assert_eq!(base_name("a.go"), "a.go");
        assert_eq!(base_name("dir/"), "dir");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("//"), "/");
        assert_eq!(base_name(""), ".");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_base_name_keeps_backslash_on_unix() {
        assert_eq!(base_name("src\\lib.rs"), "src\\lib.rs");
        assert_eq!(base_name("a/b\\c.rs"), "b\\c.rs");
    }

    #[cfg(windows)]
    #[test]
    fn test_base_name_windows_separator() {
        assert_eq!(base_name("src\\lib.rs"), "lib.rs");
        assert_eq!(base_name("C:\\src/lib.rs"), "lib.rs");
    }

    #[test]
    fn test_long_location() {
        let frame = frame();
        assert_eq!(
            frame.with_spec(FormatSpec::long('v')).to_string(),
            "example.com/sample/a/a.go:10"
        );
        assert_eq!(format!("{:#}", frame), "example.com/sample/a/a.go:10");
        assert_eq!(format!("{}", frame), "a.go:10");
    }

    #[test]
    fn test_unknown_verb_writes_nothing() {
        let frame = frame();
        assert_eq!(frame.with_spec(FormatSpec::short('x')).to_string(), "");
        assert_eq!(frame.with_spec(FormatSpec::long('q')).to_string(), "");
    }

    #[test]
    fn test_template_directives() {
        let frame = frame();
        assert_eq!(
            render("%s:%d %+P.%n", &frame),
            "a.go:10 example.com/sample/a.F.G.func1"
        );
        assert_eq!(render("100%% in %P", &frame), "100% in a");
        assert_eq!(render("100%+% in %P", &frame), "100% in a");
        assert_eq!(render("at %v%", &frame), "at a.go:10%");
        assert_eq!(render("at %v%+", &frame), "at a.go:10%+");
        assert_eq!(render("[%x]", &frame), "[]");
        assert_eq!(render("plain text", &frame), "plain text");
    }
}
