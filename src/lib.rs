#![forbid(unsafe_code)]

//! CsvCompare: line-by-line comparison of delimited files
//!
//! The interesting machinery lives in [`cmdline`]: a shell-style tokenizer
//! and a composable option-matching framework that turns a raw command line
//! string into validated, typed option state. [`compare`] and [`output`]
//! are the CSV domain built on top of it.

pub mod cli;
pub mod cmdline;
pub mod compare;
pub mod output;
