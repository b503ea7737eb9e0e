//! JSON rendering of trace reports.
//!
//! Reports are only turned into strings here; where they go (a log line,
//! stdout) is up to the caller.

use super::schema::TraceReport;
use crate::utils::error::OutputError;
use log::debug;

/// Serialize a report to JSON
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report to serialize
/// * `pretty` - Indent the output (for terminals) or keep it on one line (for log lines)
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn to_json(report: &TraceReport, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    debug!("Serialized report with {} frames ({} bytes)", report.frames.len(), json.len());

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Frame, RawFrame, StackTrace};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn create_test_report() -> TraceReport {
        let stack: StackTrace = vec![Frame::from_raw(RawFrame::new(
            "example.com/sample/a.F.G.func1",
            "example.com/sample/a/a.go",
            10,
        ))]
        .into();
        let captured_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        TraceReport::at(&stack, captured_at)
    }

    #[test]
    fn test_compact_json() {
        let json = to_json(&create_test_report(), false).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"version":"1.0.0","captured_at":"2024-01-01T00:00:00Z","frames":["#,
                r#"{"function":"example.com/sample/a.F.G.func1","func_name":"F.G.func1","#,
                r#""pkg_path":"example.com/sample/a","pkg_name":"a","#,
                r#""file":"example.com/sample/a/a.go","line":10}]}"#
            )
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let report = create_test_report();
        let json = to_json(&report, true).unwrap();
        assert!(json.contains('\n'));

        let loaded: TraceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.captured_at, report.captured_at);
        assert_eq!(loaded.frames, report.frames);
    }

    #[test]
    fn test_empty_stack_report() {
        let report = TraceReport::new(&StackTrace::default());
        let json = to_json(&report, false).unwrap();
        assert!(json.ends_with(r#""frames":[]}"#));
    }
}
