#![forbid(unsafe_code)]

//! CsvCompare option state and matchers
//!
//! The domain consumer of the `cmdline` framework: one matcher per option,
//! registered in order and terminated by the `finish` validation matcher.

use std::path::PathBuf;

use crate::cmdline::{
    bad_argument_matcher, find_flag, find_flag_with, find_parameter_each, CommandLineArguments,
    EarlyExit, MatchResult, MatcherFn,
};

/// Name used in usage and error display.
pub const PROGRAM_NAME: &str = "CsvCompare";

const SKIP_LINE_FLAG: &str = "-s";
const TRIM_WHITESPACE_FLAG: &str = "-t";
const HELP_FLAGS: [&str; 3] = ["-?", "-h", "--help"];

const EXPECTED_ARGUMENT_COUNT: usize = 2;
const DEFAULT_SKIP_LINE_COUNT: u32 = 1;

/// Parsed CsvCompare options.
#[derive(Debug)]
pub struct CsvCompareArgs {
    /// Initial lines to read but not compare; defaults to 1 (a header row).
    pub skip_line_count: u32,
    pub trim_whitespace: bool,
    pub file_name_left: Option<PathBuf>,
    pub file_name_right: Option<PathBuf>,
    show_help: bool,
    errors: Vec<String>,
}

impl Default for CsvCompareArgs {
    fn default() -> Self {
        CsvCompareArgs {
            skip_line_count: DEFAULT_SKIP_LINE_COUNT,
            trim_whitespace: false,
            file_name_left: None,
            file_name_right: None,
            show_help: false,
            errors: Vec::new(),
        }
    }
}

impl CsvCompareArgs {
    fn skip_line_matcher(&mut self, tokens: &mut Vec<String>) -> MatchResult {
        let skip_line_count = &mut self.skip_line_count;
        let errors = &mut self.errors;
        find_parameter_each(SKIP_LINE_FLAG, tokens, |text| match text.parse::<u32>() {
            Ok(count) => *skip_line_count = count,
            Err(_) => errors.push(format!(
                "SkipLineCount of {text} is not a valid unsigned integer."
            )),
        });
        Ok(())
    }

    fn trim_matcher(&mut self, tokens: &mut Vec<String>) -> MatchResult {
        find_flag_with(TRIM_WHITESPACE_FLAG, tokens, || self.trim_whitespace = true);
        Ok(())
    }

    fn help_matcher(&mut self, tokens: &mut Vec<String>) -> MatchResult {
        // Every help alias is consumed, even when an earlier one already hit.
        for flag in HELP_FLAGS {
            if find_flag(flag, tokens) {
                self.show_help = true;
            }
        }
        Ok(())
    }

    fn unrecognized_matcher(&mut self, tokens: &mut Vec<String>) -> MatchResult {
        bad_argument_matcher(tokens, &mut self.errors);
        Ok(())
    }

    /// Terminal validation matcher: help short-circuits cleanly; otherwise
    /// exactly two existing files are required. The file names stay in the
    /// token list so the remainder reflects the accepted positionals.
    fn finish(&mut self, tokens: &mut Vec<String>) -> MatchResult {
        if self.show_help {
            return Err(EarlyExit::silent());
        }

        if tokens.len() != EXPECTED_ARGUMENT_COUNT {
            self.errors.push(
                "Incorrect number of filenames specified for comparison; \
                 there should be exactly two."
                    .to_string(),
            );
            return Ok(());
        }

        let left = PathBuf::from(&tokens[0]);
        let right = PathBuf::from(&tokens[1]);

        if !left.exists() {
            self.errors.push(format!(
                "Left file '{}' does not exist at the specified location.",
                left.display()
            ));
        }
        if !right.exists() {
            self.errors.push(format!(
                "Right file '{}' does not exist at the specified location.",
                right.display()
            ));
        }

        self.file_name_left = Some(left);
        self.file_name_right = Some(right);
        Ok(())
    }
}

impl CommandLineArguments for CsvCompareArgs {
    fn matchers() -> Vec<MatcherFn<Self>> {
        vec![
            Self::skip_line_matcher,
            Self::trim_matcher,
            Self::help_matcher,
            Self::unrecognized_matcher,
            Self::finish,
        ]
    }

    fn help(&self) -> String {
        format!(
            "[{SKIP_LINE_FLAG} <skip-line-count>] [{TRIM_WHITESPACE_FLAG}] [-?|-h|--help] \
             <left-file-name> <right-file-name>\n\
             \x20   {SKIP_LINE_FLAG} <line-count>   :  Skip the specified number of initial lines \
             before comparison (defaults to {DEFAULT_SKIP_LINE_COUNT})\n\
             \x20   {TRIM_WHITESPACE_FLAG}                :  trim whitespace\n\
             \x20   -? | -h | --help  :  show this help\n"
        )
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}
