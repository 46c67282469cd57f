#![forbid(unsafe_code)]

//! Argument-set orchestration and disposition reporting
//!
//! Ties a matcher sequence, an accumulated error list, and the early-exit
//! path into one state machine: `Parsing -> Succeeded | Failed |
//! TerminatedEarly`. Parsing is a pure computation producing a
//! [`Disposition`]; writing output and ending the process happen once, at
//! the outermost boundary, so the core stays testable.

use std::io::{self, Write};

use crate::cmdline::matcher::is_flag;
use crate::cmdline::parser::{CommandLineParser, MatcherFn};

/// Exit status for a syntactically valid command line.
pub const EXIT_VALID_COMMAND_LINE: i32 = 0;
/// Default exit status for a rejected command line.
pub const DEFAULT_EXIT_BAD_COMMAND_LINE: i32 = -1;

/// An argument set: option state plus the matcher sequence that fills it.
///
/// Matchers run in the returned order over the shared token list; the last
/// entry is conventionally a validation matcher that inspects the remainder.
/// Errors accumulate across all matchers rather than failing fast, and a
/// non-empty error list makes the whole parse invalid.
pub trait CommandLineArguments: Sized {
    /// Ordered matcher sequence, terminated by the validation matcher.
    fn matchers() -> Vec<MatcherFn<Self>>;

    /// Usage text displayed after the program name.
    fn help(&self) -> String;

    /// Errors recorded so far, in the order they were recorded.
    fn errors(&self) -> &[String];

    /// Exit status used when the command line is rejected.
    fn bad_command_line_code(&self) -> i32 {
        DEFAULT_EXIT_BAD_COMMAND_LINE
    }
}

/// Terminal outcome of one parse invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The command line was valid; the remainder holds the unconsumed
    /// positional tokens.
    Succeeded { remainder: Vec<String> },
    /// A matcher requested a clean stop (help display and the like).
    TerminatedEarly { message: Option<String> },
    /// The command line was rejected; errors are reported in order.
    Failed { errors: Vec<String> },
}

/// Parse a raw command line against an argument set.
///
/// An early exit raised while errors are already recorded resolves to
/// [`Disposition::Failed`]: errors take priority over the exit message.
pub fn parse_line<T: CommandLineArguments>(args: &mut T, raw: &str) -> Disposition {
    let mut parser = CommandLineParser::new(raw);
    let result = parser.parse(args, &T::matchers());

    if !args.errors().is_empty() {
        return Disposition::Failed {
            errors: args.errors().to_vec(),
        };
    }

    match result {
        Ok(remainder) => Disposition::Succeeded { remainder },
        Err(exit) => Disposition::TerminatedEarly {
            message: exit.message,
        },
    }
}

/// Catch-all matcher for leftover flag-looking tokens.
///
/// Locates the last flag-looking token; everything up to and including it is
/// reported as unrecognized and removed. Tokens after that index are left as
/// candidate positional arguments for a later validation matcher.
pub fn bad_argument_matcher(tokens: &mut Vec<String>, errors: &mut Vec<String>) {
    let Some(found_at) = tokens.iter().rposition(|token| is_flag(token)) else {
        return;
    };
    for token in tokens.drain(..=found_at) {
        errors.push(format!("Unrecognized argument: '{token}'"));
    }
}

/// Write the user-facing report for a non-success disposition.
///
/// Succeeded dispositions produce no output here; the caller proceeds with
/// the parsed values instead.
pub fn report<W: Write>(
    writer: &mut W,
    program_name: &str,
    help: &str,
    disposition: &Disposition,
) -> io::Result<()> {
    match disposition {
        Disposition::Succeeded { .. } => Ok(()),
        Disposition::TerminatedEarly { message } => {
            if let Some(message) = message {
                writeln!(writer, "{message}")?;
            }
            writeln!(writer, "{program_name} {help}")
        }
        Disposition::Failed { errors } => {
            writeln!(writer, "Command syntax-error:")?;
            for error in errors {
                writeln!(writer, "    {error}")?;
            }
            writeln!(writer, "Usage:")?;
            writeln!(writer, "{program_name} {help}")
        }
    }
}

/// Map a disposition to the process exit status.
pub fn exit_code(disposition: &Disposition, bad_command_line_code: i32) -> i32 {
    match disposition {
        Disposition::Succeeded { .. } | Disposition::TerminatedEarly { .. } => {
            EXIT_VALID_COMMAND_LINE
        }
        Disposition::Failed { .. } => bad_command_line_code,
    }
}
