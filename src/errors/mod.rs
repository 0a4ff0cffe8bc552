//! Error types and error handling for the lexer.
//!
//! This module defines the errors produced while tokenizing and while
//! reading source files. It includes:
//!
//! - The `LexicalError` raised on the first unrecognised input
//! - Specific error variants for each way a lex can fail
//! - Error names and suggestions used for diagnostic output
//! - `DriverError` for failures outside the lexer itself

pub mod errors;
