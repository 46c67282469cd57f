#![forbid(unsafe_code)]

//! CSV record splitting and file comparison

pub mod engine;
pub mod record;

pub use engine::{compare_files, compare_lines, CompareError, CompareOptions, CompareReport, Verdict};
pub use record::{split_record, RecordError};
