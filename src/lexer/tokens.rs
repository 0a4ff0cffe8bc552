use lazy_static::lazy_static;
use std::{collections::{vec_deque, HashSet, VecDeque}, fmt::Display, ops::Index};

/// Words set aside for language features the lexer does not support.
/// Meeting one of these is a fatal error.
pub const RESERVED_WORDS: &[&str] = &[
    "for",
    "callout",
    "class",
    "interface",
    "extends",
    "implements",
    "new",
    "this",
    "string",
    "float",
    "double",
    "null",
];

lazy_static! {
    pub static ref SUPPORTED_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("def");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("return");
        set.insert("break");
        set.insert("continue");
        set.insert("int");
        set.insert("bool");
        set.insert("void");
        set.insert("true");
        set.insert("false");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    DecimalLiteral,
    HexLiteral,
    StringLiteral,
    Symbol,
}

impl TokenKind {
    /// Short code used in token listings.
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEY",
            TokenKind::Identifier => "ID",
            TokenKind::DecimalLiteral => "DECLIT",
            TokenKind::HexLiteral => "HEXLIT",
            TokenKind::StringLiteral => "STRLIT",
            TokenKind::Symbol => "SYM",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
    offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: usize, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line the token starts on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Byte offset of the token in the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<6} {}", self.kind.code(), self.lexeme)
    }
}

/// Tokens in source order. Filled by the lexer, then consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        TokenStream {
            tokens: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Renders one `KIND text` line per token.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for token in &self.tokens {
            result.push_str(&token.to_string());
            result.push('\n');
        }
        result
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = vec_deque::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = vec_deque::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
