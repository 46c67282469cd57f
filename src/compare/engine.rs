#![forbid(unsafe_code)]

//! Line-by-line comparison of two delimited files
//!
//! Both files are walked in lockstep from line 1. The first `skip_lines`
//! lines are read (and can still fail as malformed) but not compared. The
//! first difference wins: a shorter file, a malformed record, a field-count
//! mismatch, or a field value mismatch. Blank fields and the literal text
//! `NULL` are treated as equivalent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compare::record::split_record;

const NULL_TEXT: &str = "NULL";

/// I/O-level failure while comparing files.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Options controlling the comparison.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Number of initial lines to read but not compare.
    pub skip_lines: u32,
    /// Trim whitespace around unquoted field values.
    pub trim_whitespace: bool,
}

/// Outcome of one comparison; line and field numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every compared line matched; `lines_read` counts skipped lines too.
    Match { lines_read: u32 },
    /// The left file ran out of data while the right still had lines.
    LeftShorter { line: u32 },
    /// The right file ran out of data at this left-file line.
    RightShorter { line: u32 },
    LeftMalformed { line: u32 },
    RightMalformed { line: u32 },
    /// The two records hold different numbers of fields.
    FieldCountMismatch { line: u32 },
    /// A field value differed; `left` and `right` carry the re-joined lines.
    FieldMismatch {
        line: u32,
        field: usize,
        left: String,
        right: String,
    },
}

impl Verdict {
    /// Whether the files compared as identical.
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match { .. })
    }

    /// The one-line result message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Verdict::Match { lines_read } => {
                format!("Read {lines_read} matching lines; files are the same")
            }
            Verdict::LeftShorter { line } => {
                format!("Left file is shorter - out of data at line {line}")
            }
            Verdict::RightShorter { line } => {
                format!("Right file is shorter - out of data at line {line}")
            }
            Verdict::LeftMalformed { line } => format!("Left file malformed at line {line}"),
            Verdict::RightMalformed { line } => format!("Right file malformed at line {line}"),
            Verdict::FieldCountMismatch { line } => format!("Field counts differ at line {line}"),
            Verdict::FieldMismatch { line, field, .. } => {
                format!("Files differ at line {line}, field {field}")
            }
        }
    }
}

/// A verdict plus the context the reporter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareReport {
    pub verdict: Verdict,
    /// How many initial lines were excluded from comparison.
    pub skipped: u32,
}

/// Whether two field values compare as equal.
///
/// Exact equality, both blank, or blank on one side with `NULL` (any case)
/// on the other.
fn fields_equivalent(left: &str, right: &str) -> bool {
    if left == right {
        return true;
    }
    if left.is_empty() && right.is_empty() {
        return true;
    }
    if left.is_empty() && right.to_uppercase() == NULL_TEXT {
        return true;
    }
    if right.is_empty() && left.to_uppercase() == NULL_TEXT {
        return true;
    }
    false
}

/// Compare two sequences of record lines.
pub fn compare_lines<'a, L, R>(left: L, right: R, options: &CompareOptions) -> Verdict
where
    L: IntoIterator<Item = &'a str>,
    R: IntoIterator<Item = &'a str>,
{
    let mut right = right.into_iter();
    let mut lines_read = 0u32;

    for left_line in left {
        let line = lines_read + 1;

        let Some(right_line) = right.next() else {
            return Verdict::RightShorter { line };
        };

        let Ok(left_fields) = split_record(left_line, options.trim_whitespace) else {
            return Verdict::LeftMalformed { line };
        };
        let Ok(right_fields) = split_record(right_line, options.trim_whitespace) else {
            return Verdict::RightMalformed { line };
        };

        lines_read = line;
        if line <= options.skip_lines {
            continue;
        }

        if left_fields.len() != right_fields.len() {
            return Verdict::FieldCountMismatch { line };
        }

        for (ff, (left_field, right_field)) in
            left_fields.iter().zip(right_fields.iter()).enumerate()
        {
            if !fields_equivalent(left_field, right_field) {
                return Verdict::FieldMismatch {
                    line,
                    field: ff + 1,
                    left: left_fields.join(", "),
                    right: right_fields.join(", "),
                };
            }
        }
    }

    if right.next().is_some() {
        return Verdict::LeftShorter { line: lines_read };
    }

    Verdict::Match { lines_read }
}

/// Compare two files on disk.
pub fn compare_files(
    left: &Path,
    right: &Path,
    options: &CompareOptions,
) -> Result<CompareReport, CompareError> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|source| CompareError::Io {
            path: path.to_path_buf(),
            source,
        })
    };
    let left_text = read(left)?;
    let right_text = read(right)?;

    let verdict = compare_lines(left_text.lines(), right_text.lines(), options);
    Ok(CompareReport {
        verdict,
        skipped: options.skip_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(left: &[&str], right: &[&str], options: &CompareOptions) -> Verdict {
        compare_lines(left.iter().copied(), right.iter().copied(), options)
    }

    fn no_skip() -> CompareOptions {
        CompareOptions::default()
    }

    #[test]
    fn test_identical_files_match() {
        let lines = ["h1,h2", "1,2", "3,4"];
        let verdict = compare(&lines, &lines, &no_skip());
        assert_eq!(verdict, Verdict::Match { lines_read: 3 });
        assert!(verdict.is_match());
    }

    #[test]
    fn test_empty_files_match() {
        assert_eq!(compare(&[], &[], &no_skip()), Verdict::Match { lines_read: 0 });
    }

    #[test]
    fn test_field_mismatch_reports_line_and_field() {
        let verdict = compare(&["a,b", "c,d"], &["a,b", "c,x"], &no_skip());
        assert_eq!(
            verdict,
            Verdict::FieldMismatch {
                line: 2,
                field: 2,
                left: "c, d".to_string(),
                right: "c, x".to_string(),
            }
        );
        assert_eq!(verdict.message(), "Files differ at line 2, field 2");
    }

    #[test]
    fn test_field_count_mismatch() {
        let verdict = compare(&["a,b"], &["a,b,c"], &no_skip());
        assert_eq!(verdict, Verdict::FieldCountMismatch { line: 1 });
    }

    #[test]
    fn test_right_file_shorter() {
        let verdict = compare(&["a", "b"], &["a"], &no_skip());
        assert_eq!(verdict, Verdict::RightShorter { line: 2 });
    }

    #[test]
    fn test_left_file_shorter() {
        let verdict = compare(&["a"], &["a", "b"], &no_skip());
        assert_eq!(verdict, Verdict::LeftShorter { line: 1 });
    }

    #[test]
    fn test_skip_window_excludes_differing_header() {
        let options = CompareOptions {
            skip_lines: 1,
            ..no_skip()
        };
        let verdict = compare(&["old header", "1,2"], &["new header", "1,2"], &options);
        assert_eq!(verdict, Verdict::Match { lines_read: 2 });
    }

    #[test]
    fn test_skipped_lines_still_counted_and_parsed() {
        let options = CompareOptions {
            skip_lines: 2,
            ..no_skip()
        };
        // A malformed record inside the skip window is still a failure.
        let verdict = compare(&["\"open", "x"], &["a", "x"], &options);
        assert_eq!(verdict, Verdict::LeftMalformed { line: 1 });
    }

    #[test]
    fn test_malformed_right_record() {
        let verdict = compare(&["a,b"], &["a,\"open"], &no_skip());
        assert_eq!(verdict, Verdict::RightMalformed { line: 1 });
    }

    #[test]
    fn test_null_and_blank_fields_equivalent() {
        assert_eq!(
            compare(&["a,,c"], &["a,NULL,c"], &no_skip()),
            Verdict::Match { lines_read: 1 }
        );
        assert_eq!(
            compare(&["a,null,c"], &["a,,c"], &no_skip()),
            Verdict::Match { lines_read: 1 }
        );
    }

    #[test]
    fn test_null_against_value_is_a_mismatch() {
        let verdict = compare(&["NULL"], &["x"], &no_skip());
        assert!(matches!(verdict, Verdict::FieldMismatch { line: 1, field: 1, .. }));
    }

    #[test]
    fn test_trim_whitespace_option() {
        let options = CompareOptions {
            trim_whitespace: true,
            ..no_skip()
        };
        assert_eq!(
            compare(&["a , b"], &["a,b"], &options),
            Verdict::Match { lines_read: 1 }
        );
        assert!(matches!(
            compare(&["a , b"], &["a,b"], &no_skip()),
            Verdict::FieldMismatch { .. }
        ));
    }

    #[test]
    fn test_quoted_comma_compares_as_one_field() {
        assert_eq!(
            compare(&["\"a,b\",c"], &["\"a,b\",c"], &no_skip()),
            Verdict::Match { lines_read: 1 }
        );
    }

    #[test]
    fn test_match_counts_skipped_lines() {
        let options = CompareOptions {
            skip_lines: 1,
            ..no_skip()
        };
        let verdict = compare(&["h", "1"], &["h2", "1"], &options);
        assert_eq!(verdict, Verdict::Match { lines_read: 2 });
        assert_eq!(verdict.message(), "Read 2 matching lines; files are the same");
    }

    #[test]
    fn test_compare_files_missing_file_is_io_error() {
        let missing = Path::new("definitely/not/here.csv");
        let result = compare_files(missing, missing, &no_skip());
        let Err(CompareError::Io { path, .. }) = result else {
            panic!("expected an I/O error");
        };
        assert_eq!(path, missing);
    }

    #[test]
    fn test_compare_files_reads_and_reports() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let left = dir.path().join("left.csv");
        let right = dir.path().join("right.csv");
        std::fs::write(&left, "h\n1,2\n").expect("write left");
        std::fs::write(&right, "h\n1,2\n").expect("write right");

        let options = CompareOptions {
            skip_lines: 1,
            ..no_skip()
        };
        let report = compare_files(&left, &right, &options).expect("compare");
        assert_eq!(report.verdict, Verdict::Match { lines_read: 2 });
        assert_eq!(report.skipped, 1);
    }
}
