#![forbid(unsafe_code)]

//! Command line tokenizing and option-matching framework
//!
//! Raw command line string in, validated option state out: the tokenizer
//! splits the line with shell-like quoting rules, extraction primitives pull
//! flags and parameters out of the shared token list, the parser threads
//! that list through an ordered matcher sequence, and the orchestrator maps
//! the outcome (success, accumulated errors, or an early-exit signal) to a
//! final disposition.

pub mod arguments;
pub mod matcher;
pub mod parser;
pub mod tokenizer;

pub use arguments::{
    bad_argument_matcher, exit_code, parse_line, report, CommandLineArguments, Disposition,
    DEFAULT_EXIT_BAD_COMMAND_LINE, EXIT_VALID_COMMAND_LINE,
};
pub use matcher::{
    find_flag, find_flag_with, find_parameter, find_parameter_each, find_parameters, is_flag,
};
pub use parser::{CommandLineParser, EarlyExit, MatchResult, MatcherFn};
pub use tokenizer::{join_command_line, split_command_line};
