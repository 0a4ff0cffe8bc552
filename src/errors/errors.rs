use std::fmt::Display;

use thiserror::Error;

/// Where in the source an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct LexicalError {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        LexicalError {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// An error that is not tied to any source text, such as a rule
    /// pattern that fails to compile.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        LexicalError {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn line(&self) -> Option<usize> {
        self.position.map(|position| position.line)
    }

    pub fn offset(&self) -> Option<usize> {
        self.position.map(|position| position.offset)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::ReservedWord { .. } => "ReservedWord",
            ErrorImpl::LexemeTooLong { .. } => "LexemeTooLong",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { found } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}`",
                found.escape_default()
            )),
            ErrorImpl::ReservedWord { word } => ErrorTip::Suggestion(format!(
                "`{}` is reserved for a language feature that is not supported",
                word
            )),
            ErrorImpl::LexemeTooLong { len, max } => ErrorTip::Suggestion(format!(
                "Token is {} bytes long, the limit is {}",
                len, max
            )),
            ErrorImpl::EmptyMatch { .. } | ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid token!")]
    InvalidToken { found: char },
    #[error("reserved word {word:?} is not supported")]
    ReservedWord { word: String },
    #[error("lexeme of {len} bytes exceeds the maximum of {max}")]
    LexemeTooLong { len: usize, max: usize },
    #[error("rule {rule} matched an empty lexeme")]
    EmptyMatch { rule: usize },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Failures of the command-line driver around the lexer.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Could not read file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("source file {path} is {len} bytes, the limit is {max}")]
    SourceTooLarge { path: String, len: usize, max: usize },
}
