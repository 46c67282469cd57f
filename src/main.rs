#![forbid(unsafe_code)]

//! CsvCompare binary entry point
//!
//! The single process boundary: everything below computes values; this file
//! writes the output and ends the process exactly once.

use std::env;
use std::io;
use std::process;

use termcolor::ColorChoice;

use csvcompare::cli::{CsvCompareArgs, PROGRAM_NAME};
use csvcompare::cmdline::{
    exit_code, join_command_line, parse_line, report, CommandLineArguments, Disposition,
    EXIT_VALID_COMMAND_LINE,
};
use csvcompare::compare::{compare_files, CompareOptions};
use csvcompare::output::HumanReporter;

const EXIT_COMPARE_ERROR: i32 = 1;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    // The OS hands arguments over pre-split; the framework parses a raw
    // line, so rebuild one with quoting that survives re-tokenization.
    let raw = join_command_line(env::args());

    let mut args = CsvCompareArgs::default();
    let disposition = parse_line(&mut args, &raw);

    match &disposition {
        Disposition::Succeeded { .. } => {}
        other => {
            let mut stdout = io::stdout();
            if report_failed(&mut stdout, &args, other).is_err() {
                return EXIT_COMPARE_ERROR;
            }
            return exit_code(other, args.bad_command_line_code());
        }
    }

    // The validation matcher guarantees both names are present on success.
    let (Some(left), Some(right)) = (&args.file_name_left, &args.file_name_right) else {
        eprintln!("{PROGRAM_NAME}: internal error: file names missing after a valid parse");
        return EXIT_COMPARE_ERROR;
    };

    let options = CompareOptions {
        skip_lines: args.skip_line_count,
        trim_whitespace: args.trim_whitespace,
    };
    match compare_files(left, right, &options) {
        Ok(report) => {
            let reporter = HumanReporter::new(ColorChoice::Auto);
            if let Err(error) = reporter.write_to_stdout(&report) {
                eprintln!("{PROGRAM_NAME}: failed to write report: {error}");
                return EXIT_COMPARE_ERROR;
            }
            EXIT_VALID_COMMAND_LINE
        }
        Err(error) => {
            eprintln!("{PROGRAM_NAME}: {error}");
            EXIT_COMPARE_ERROR
        }
    }
}

fn report_failed(
    writer: &mut impl io::Write,
    args: &CsvCompareArgs,
    disposition: &Disposition,
) -> io::Result<()> {
    report(writer, PROGRAM_NAME, &args.help(), disposition)
}
