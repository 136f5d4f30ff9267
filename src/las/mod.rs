//! LAS file reading

pub mod parser;

pub use parser::{parse_str, read_file, LasError};
