use tracing::{debug, trace};

use crate::{
    config::LexerConfig,
    errors::errors::{ErrorImpl, LexicalError, Position},
    MK_TOKEN,
};

use super::{
    rules::{Action, RuleTable, RULES},
    tokens::{Token, TokenKind, TokenStream, SUPPORTED_KEYWORDS},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TriviaKind {
    Whitespace,
    Newline,
    Comment,
}

/// Source text the lexer consumed without emitting a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub line: usize,
    pub offset: usize,
}

pub struct Lexer<'src> {
    rules: &'static RuleTable,
    tokens: TokenStream,
    trivia: Vec<Trivia>,
    source: &'src str,
    pos: usize,
    line: usize,
    config: LexerConfig,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, config: LexerConfig) -> Result<Lexer<'src>, LexicalError> {
        let rules = RULES.as_ref().map_err(Clone::clone)?;

        Ok(Lexer {
            rules,
            tokens: TokenStream::new(),
            trivia: vec![],
            source,
            pos: 0,
            line: 1,
            config,
        })
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.pos,
        }
    }

    fn error(&self, error_impl: ErrorImpl) -> LexicalError {
        debug!(line = self.line, offset = self.pos, error = %error_impl, "lex failed");
        LexicalError::new(error_impl, self.position())
    }

    /// Applies the first matching rule at the cursor.
    fn step(&mut self) -> Result<(), LexicalError> {
        let remaining = self.remainder();

        let Some((index, rule, matched)) = self.rules.first_match(remaining) else {
            return Err(self.error(ErrorImpl::InvalidToken {
                found: self.at().unwrap_or_default(),
            }));
        };

        if matched.is_empty() {
            return Err(self.error(ErrorImpl::EmptyMatch { rule: index }));
        }

        trace!(rule = index, line = self.line, lexeme = matched, "matched");

        match rule.action() {
            Action::Skip => self.skip(TriviaKind::Whitespace, matched),
            Action::SkipAndCountLine => {
                self.skip(TriviaKind::Newline, matched);
                self.line += 1;
            }
            Action::ConsumeLineComment => {
                self.skip(TriviaKind::Comment, matched);
                self.line += 1;
            }
            Action::Reject => {
                return Err(self.error(ErrorImpl::ReservedWord {
                    word: matched.to_string(),
                }))
            }
            Action::EmitToken(kind) => self.emit(kind, matched)?,
            Action::EmitWord => {
                let kind = if SUPPORTED_KEYWORDS.contains(matched) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                self.emit(kind, matched)?;
            }
        }

        Ok(())
    }

    fn skip(&mut self, kind: TriviaKind, matched: &str) {
        self.trivia.push(Trivia {
            kind,
            text: matched.to_string(),
            line: self.line,
            offset: self.pos,
        });
        self.advance_n(matched.len());
    }

    fn emit(&mut self, kind: TokenKind, matched: &str) -> Result<(), LexicalError> {
        if matched.len() > self.config.max_lexeme_len {
            return Err(self.error(ErrorImpl::LexemeTooLong {
                len: matched.len(),
                max: self.config.max_lexeme_len,
            }));
        }

        self.tokens.push(MK_TOKEN!(kind, matched, self.line, self.pos));
        self.advance_n(matched.len());

        // String literals may span lines; the token keeps its first line.
        self.line += matched.matches('\n').count();

        Ok(())
    }

    /// Runs the lexer to the end of the source or to the first error.
    pub fn run(mut self) -> Result<(TokenStream, Vec<Trivia>), LexicalError> {
        debug!(len = self.source.len(), "lexing");

        while !self.at_eof() {
            self.step()?;
        }

        debug!(tokens = self.tokens.len(), lines = self.line, "lexed");
        Ok((self.tokens, self.trivia))
    }
}

/// Tokenizes `source` with the default limits.
pub fn tokenize(source: &str) -> Result<TokenStream, LexicalError> {
    tokenize_with(source, LexerConfig::default())
}

pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<TokenStream, LexicalError> {
    let (tokens, _) = Lexer::new(source, config)?.run()?;
    Ok(tokens)
}

/// Tokenizes `source`, also returning every skipped span. Tokens and trivia
/// together cover the source exactly once.
pub fn tokenize_with_trivia(
    source: &str,
    config: LexerConfig,
) -> Result<(TokenStream, Vec<Trivia>), LexicalError> {
    Lexer::new(source, config)?.run()
}
