//! Parse command implementation.
//!
//! Splits symbols given on the command line into function name, import
//! path and package name.

use crate::output::FrameSummary;
use crate::parser::qualify;
use crate::trace::{Frame, RawFrame};
use anyhow::{Context, Result};
use log::debug;

/// Arguments for the parse command
#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// Symbols to split
    pub symbols: Vec<String>,

    /// Treat symbols as demangled Rust paths (`a::b::f`)
    pub rust: bool,

    /// Print JSON instead of text
    pub json: bool,
}

/// Execute the parse command, returning the text to print
pub fn execute_parse(args: &ParseArgs) -> Result<String> {
    let summaries: Vec<FrameSummary> = args
        .symbols
        .iter()
        .map(|symbol| {
            let function = if args.rust {
                qualify(symbol)
            } else {
                symbol.clone()
            };
            debug!("Parsing symbol {:?} as {:?}", symbol, function);
            FrameSummary::from(&Frame::from_raw(RawFrame::new(function, "", 0)))
        })
        .collect();

    if args.json {
        return serde_json::to_string_pretty(&summaries).context("Failed to serialize symbols");
    }

    let mut out = String::new();
    for summary in &summaries {
        out.push_str(&format!("{}\n", summary.function));
        out.push_str(&format!("  func_name: {}\n", summary.func_name));
        out.push_str(&format!("  pkg_path:  {}\n", summary.pkg_path));
        out.push_str(&format!("  pkg_name:  {}\n", summary.pkg_name));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_output() {
        let args = ParseArgs {
            symbols: vec!["example.com/sample/a.F.G.func1".to_string()],
            ..Default::default()
        };

        assert_eq!(
            execute_parse(&args).unwrap(),
            "example.com/sample/a.F.G.func1\n  func_name: F.G.func1\n  pkg_path:  example.com/sample/a\n  pkg_name:  a\n"
        );
    }

    #[test]
    fn test_rust_json_output() {
        let args = ParseArgs {
            symbols: vec!["my_crate::net::Server::accept".to_string()],
            rust: true,
            json: true,
        };

        let out = execute_parse(&args).unwrap();
        let parsed: Vec<FrameSummary> = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].function, "my_crate/net.Server.accept");
        assert_eq!(parsed[0].func_name, "Server.accept");
        assert_eq!(parsed[0].pkg_path, "my_crate/net");
    }
}
