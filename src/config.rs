//! Limits applied while reading and tokenizing source text.

/// Longest lexeme the lexer will emit, in bytes.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 256;

/// Largest source file the driver will read, in bytes.
pub const DEFAULT_MAX_SOURCE_LEN: usize = 65536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub max_lexeme_len: usize,
    pub max_source_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            max_source_len: DEFAULT_MAX_SOURCE_LEN,
        }
    }
}

impl LexerConfig {
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    pub fn with_max_source_len(mut self, max_source_len: usize) -> Self {
        self.max_source_len = max_source_len;
        self
    }
}
