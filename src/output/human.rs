#![forbid(unsafe_code)]

//! Human-readable comparison reporting with colorization support

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::compare::{CompareReport, Verdict};

/// Human-readable report writer
///
/// Formats a comparison report for terminal display: an optional skip note,
/// the verdict message colored green (match) or red (any difference), and
/// for a field mismatch the offending line from each file.
pub struct HumanReporter {
    color_choice: ColorChoice,
}

impl HumanReporter {
    /// Creates a new HumanReporter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanReporter { color_choice }
    }

    /// Format the report as plain text.
    pub fn format(&self, report: &CompareReport) -> String {
        let mut output = String::new();
        output.push('\n');

        if let Some(note) = skip_note(report.skipped) {
            output.push_str(&note);
            output.push('\n');
        }

        output.push_str(&report.verdict.message());
        output.push('\n');

        if let Verdict::FieldMismatch { left, right, .. } = &report.verdict {
            output.push_str(&format!("Left Line:\n{left}\n"));
            output.push_str(&format!("Right Line:\n{right}\n"));
        }

        output
    }

    /// Write the report to stdout with the verdict colorized.
    pub fn write_to_stdout(&self, report: &CompareReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_colored(&mut stdout, report)
    }

    /// Write the report to any color-capable writer.
    pub fn write_colored<W: WriteColor>(
        &self,
        writer: &mut W,
        report: &CompareReport,
    ) -> io::Result<()> {
        writeln!(writer)?;

        if let Some(note) = skip_note(report.skipped) {
            writeln!(writer, "{note}")?;
        }

        let verdict_color = if report.verdict.is_match() {
            Color::Green
        } else {
            Color::Red
        };
        writer.set_color(ColorSpec::new().set_fg(Some(verdict_color)))?;
        writeln!(writer, "{}", report.verdict.message())?;
        writer.reset()?;

        if let Verdict::FieldMismatch { left, right, .. } = &report.verdict {
            writeln!(writer, "Left Line:\n{left}")?;
            writeln!(writer, "Right Line:\n{right}")?;
        }

        Ok(())
    }
}

fn skip_note(skipped: u32) -> Option<String> {
    match skipped {
        0 => None,
        1 => Some("Skipped first line".to_string()),
        n => Some(format!("Skipped {n} lines")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn match_report(lines_read: u32, skipped: u32) -> CompareReport {
        CompareReport {
            verdict: Verdict::Match { lines_read },
            skipped,
        }
    }

    #[test]
    fn test_format_match_without_skip() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let output = reporter.format(&match_report(4, 0));
        assert_eq!(output, "\nRead 4 matching lines; files are the same\n");
    }

    #[test]
    fn test_format_skip_note_singular() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let output = reporter.format(&match_report(4, 1));
        assert!(output.contains("Skipped first line\n"));
    }

    #[test]
    fn test_format_skip_note_plural() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let output = reporter.format(&match_report(9, 3));
        assert!(output.contains("Skipped 3 lines\n"));
    }

    #[test]
    fn test_format_field_mismatch_shows_both_lines() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let report = CompareReport {
            verdict: Verdict::FieldMismatch {
                line: 2,
                field: 1,
                left: "a, b".to_string(),
                right: "x, b".to_string(),
            },
            skipped: 0,
        };
        let output = reporter.format(&report);
        assert!(output.contains("Files differ at line 2, field 1"));
        assert!(output.contains("Left Line:\na, b\n"));
        assert!(output.contains("Right Line:\nx, b\n"));
    }

    #[test]
    fn test_format_shorter_file_has_no_line_dump() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let report = CompareReport {
            verdict: Verdict::RightShorter { line: 7 },
            skipped: 0,
        };
        let output = reporter.format(&report);
        assert!(output.contains("Right file is shorter - out of data at line 7"));
        assert!(!output.contains("Left Line:"));
    }

    #[test]
    fn test_write_colored_matches_plain_format() {
        let reporter = HumanReporter::new(ColorChoice::Never);
        let report = CompareReport {
            verdict: Verdict::FieldMismatch {
                line: 1,
                field: 2,
                left: "a, b".to_string(),
                right: "a, c".to_string(),
            },
            skipped: 2,
        };

        let mut sink = NoColor::new(Vec::new());
        reporter
            .write_colored(&mut sink, &report)
            .expect("write to vec");
        let written = String::from_utf8(sink.into_inner()).expect("utf8");
        assert_eq!(written, reporter.format(&report));
    }
}
