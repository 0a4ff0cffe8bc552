//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Compiles a pattern and pairs it with a rule action
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The matched source text
/// * `$line` - The line the token starts on
/// * `$offset` - The byte offset of the token in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::DecimalLiteral, "42", 1, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $offset:expr) => {
        Token::new($kind, String::from($lexeme), $line, $offset)
    };
}

/// Compiles a pattern into a rule, returning early from the enclosing
/// function if the pattern is malformed.
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!(r"[ \t]+", Action::Skip);
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $action:expr) => {
        Rule::new(Pattern::compile($pattern)?, $action)
    };
}
