#![forbid(unsafe_code)]

//! CsvCompare command line surface

pub mod args;

pub use args::{CsvCompareArgs, PROGRAM_NAME};
