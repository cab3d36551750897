//! CLI module containing argument parsing and validation

pub mod args;

pub use args::{parse_args, usage, validate_args, Args};
