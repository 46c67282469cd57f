#![forbid(unsafe_code)]

//! Comparison result reporting

pub mod human;

pub use human::HumanReporter;
