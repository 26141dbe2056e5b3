// SentryView - core/ingest.rs
//
// Log ingestion: format gate, whole-file read, and naive delimited-text
// parsing. Rows are split on ',' with no quoting or escaping grammar; a
// comma inside a field value is indistinguishable from a delimiter. This
// is a documented, test-pinned limitation of the format, not a defect.

use crate::core::model::{Label, LogEntry};
use crate::util::constants;
use crate::util::error::IngestError;
use std::path::Path;

/// Returns true when the payload's declared type is csv-like: either the
/// declared media type is `text/csv` or the file name carries a `.csv`
/// extension (ASCII case-insensitive).
///
/// This is the entire format check. Content is never sniffed; a text file
/// renamed to `.csv` passes the gate and parses leniently.
pub fn is_supported_source(path: &Path, declared_mime: Option<&str>) -> bool {
    if declared_mime == Some(constants::CSV_MIME) {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(constants::CSV_EXTENSION))
}

/// Ingest a log file from disk.
///
/// The gate runs before any read is attempted. The read completes fully
/// before parsing begins; a partial read is never parsed. On any error
/// the caller's previously loaded collection must remain untouched —
/// this function only produces a new collection, it never installs one.
pub fn ingest_file(
    path: &Path,
    declared_mime: Option<&str>,
) -> Result<Vec<LogEntry>, IngestError> {
    if !is_supported_source(path, declared_mime) {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let size = std::fs::metadata(path)
        .map_err(|e| IngestError::ReadFailure {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();
    if size > constants::MAX_UPLOAD_BYTES {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_UPLOAD_BYTES,
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| IngestError::ReadFailure {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = parse_rows(&raw);
    tracing::debug!(
        file = %path.display(),
        bytes = size,
        entries = entries.len(),
        "Ingestion complete"
    );
    Ok(entries)
}

/// Parse delimited text into log entries.
///
/// Row 1 is the header: comma-separated field names, trimmed, mapped by
/// name (`timestamp`, `action`, `file_extension`, `process`,
/// `parent_process`, `label`; unknown names are ignored). Each subsequent
/// non-blank line is split on ',' positionally and zipped against the
/// header; values are trimmed and any position missing a value defaults
/// to the empty string. Ragged rows are accepted, not rejected.
///
/// Parsing cannot fail: the worst malformed input yields entries whose
/// fields are all empty.
pub fn parse_rows(raw: &str) -> Vec<LogEntry> {
    let mut lines = raw.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<&str> = line.split(',').collect();

            let mut timestamp = "";
            let mut action = "";
            let mut file_extension = "";
            let mut process = "";
            let mut parent_process = "";
            let mut raw_label = "";

            for (idx, header) in headers.iter().enumerate() {
                let value = values.get(idx).map(|v| v.trim()).unwrap_or("");
                match *header {
                    "timestamp" => timestamp = value,
                    "action" => action = value,
                    "file_extension" => file_extension = value,
                    "process" => process = value,
                    "parent_process" => parent_process = value,
                    "label" => raw_label = value,
                    _ => {}
                }
            }

            LogEntry {
                timestamp: timestamp.to_string(),
                action: action.to_string(),
                file_extension: file_extension.to_string(),
                process: process.to_string(),
                parent_process: parent_process.to_string(),
                label: Label::from_raw(raw_label),
            }
        })
        .collect()
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_gate_accepts_csv_extension_any_case() {
        assert!(is_supported_source(Path::new("events.csv"), None));
        assert!(is_supported_source(Path::new("EVENTS.CSV"), None));
        assert!(is_supported_source(Path::new("/tmp/export.Csv"), None));
    }

    #[test]
    fn test_gate_accepts_declared_csv_mime_regardless_of_name() {
        assert!(is_supported_source(Path::new("events.dat"), Some("text/csv")));
    }

    #[test]
    fn test_gate_rejects_other_types() {
        assert!(!is_supported_source(Path::new("data.txt"), None));
        assert!(!is_supported_source(Path::new("data.txt"), Some("text/plain")));
        assert!(!is_supported_source(Path::new("noextension"), None));
        // Suffix must be the extension, not a substring of the name.
        assert!(!is_supported_source(Path::new("csv"), None));
    }

    #[test]
    fn test_parse_round_trip_with_partial_header() {
        let raw = "timestamp,action,label\n2023-07-12,File created,1\n2023-07-12,File modified,0\n";
        let entries = parse_rows(raw);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].timestamp, "2023-07-12");
        assert_eq!(entries[0].action, "File created");
        assert_eq!(entries[0].label, Label::Alert);
        // Columns absent from the header come out as empty strings.
        assert_eq!(entries[0].file_extension, "");
        assert_eq!(entries[0].process, "");
        assert_eq!(entries[0].parent_process, "");

        assert_eq!(entries[1].action, "File modified");
        assert_eq!(entries[1].label, Label::Benign);
    }

    #[test]
    fn test_parse_full_header_in_any_order() {
        let raw = "process,label,timestamp,action,parent_process,file_extension\n\
                   chrome.exe,0,2023-07-12 14:40:10,File deleted,explorer.exe,.tmp\n";
        let entries = parse_rows(raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].process, "chrome.exe");
        assert_eq!(entries[0].parent_process, "explorer.exe");
        assert_eq!(entries[0].file_extension, ".tmp");
        assert_eq!(entries[0].action, "File deleted");
    }

    #[test]
    fn test_parse_skips_blank_and_whitespace_lines() {
        let raw = "timestamp,action,label\n\n   \n2023-07-12,File created,1\n\t\n";
        let entries = parse_rows(raw);
        assert_eq!(entries.len(), 1, "blank lines are not records");
    }

    #[test]
    fn test_parse_ragged_row_defaults_missing_fields() {
        // Second row stops after the action column.
        let raw = "timestamp,action,process,label\n2023-07-12,File created\n";
        let entries = parse_rows(raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "File created");
        assert_eq!(entries[0].process, "");
        assert_eq!(entries[0].label, Label::Benign);
    }

    #[test]
    fn test_parse_extra_values_beyond_header_are_ignored() {
        let raw = "timestamp,action\n2023-07-12,File created,overflow,more\n";
        let entries = parse_rows(raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "File created");
    }

    #[test]
    fn test_parse_trims_header_names_and_values() {
        let raw = " timestamp , action , label \n 2023-07-12 , File created , 1 \n";
        let entries = parse_rows(raw);
        assert_eq!(entries[0].timestamp, "2023-07-12");
        assert_eq!(entries[0].action, "File created");
        assert_eq!(entries[0].label, Label::Alert);
    }

    #[test]
    fn test_parse_unknown_headers_are_ignored() {
        let raw = "timestamp,severity,action\n2023-07-12,HIGH,File created\n";
        let entries = parse_rows(raw);
        assert_eq!(entries[0].timestamp, "2023-07-12");
        assert_eq!(entries[0].action, "File created");
    }

    /// Pins the no-quoting behaviour: a quoted field containing a comma
    /// splits at the comma like any other. Adopting a quoted-CSV grammar
    /// would be a deliberate format change, and this test would catch it.
    #[test]
    fn test_parse_has_no_quoting_grammar() {
        let raw = "timestamp,action,process\n2023-07-12,\"File created, then removed\",cmd.exe\n";
        let entries = parse_rows(raw);
        assert_eq!(entries[0].action, "\"File created");
        // The remainder of the quoted text lands in the next column.
        assert_eq!(entries[0].process, "then removed\"");
    }

    #[test]
    fn test_parse_empty_input_yields_no_entries() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("timestamp,action,label\n").is_empty());
    }

    #[test]
    fn test_ingest_rejects_wrong_extension_before_reading() {
        // The path does not exist: proving the gate fires first, since a
        // read attempt would surface ReadFailure instead.
        let missing = PathBuf::from("/nonexistent/sentryview-test/data.txt");
        let result = ingest_file(&missing, None);
        assert!(
            matches!(result, Err(IngestError::UnsupportedFormat { .. })),
            "expected UnsupportedFormat, got {result:?}"
        );
    }

    #[test]
    fn test_ingest_missing_csv_is_a_read_failure() {
        let missing = PathBuf::from("/nonexistent/sentryview-test/data.csv");
        let result = ingest_file(&missing, None);
        assert!(
            matches!(result, Err(IngestError::ReadFailure { .. })),
            "expected ReadFailure, got {result:?}"
        );
    }
}
