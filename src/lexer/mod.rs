//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Anchored pattern matching against the remaining input
//! - A priority-ordered rule table deciding what each match means
//! - Recognition of keywords, identifiers, literals, and symbols
//! - Line tracking across newlines and comments
//! - Rejection of reserved words and unrecognised characters

pub mod lexer;
pub mod pattern;
pub mod rules;
pub mod tokens;
