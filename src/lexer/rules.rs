use lazy_static::lazy_static;

use crate::{errors::errors::LexicalError, MK_RULE};

use super::{pattern::Pattern, tokens::{TokenKind, RESERVED_WORDS}};

lazy_static! {
    /// The rule table, compiled once and shared by every lex.
    pub static ref RULES: Result<RuleTable, LexicalError> = RuleTable::new();
}

/// What the lexer does with text matched by a rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Skip,
    SkipAndCountLine,
    ConsumeLineComment,
    Reject,
    EmitToken(TokenKind),
    /// Emit a keyword if the word is a supported keyword, else an identifier.
    EmitWord,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    action: Action,
}

impl Rule {
    pub fn new(pattern: Pattern, action: Action) -> Self {
        Rule { pattern, action }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

/// Rules in priority order. The first rule that matches at the cursor wins,
/// even when a later rule would match more text.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Result<RuleTable, LexicalError> {
        let reserved = format!(r"(?:{})\b", RESERVED_WORDS.join("|"));

        Ok(RuleTable {
            rules: vec![
                MK_RULE!(r"[ \t]+", Action::Skip),
                MK_RULE!(r"\n", Action::SkipAndCountLine),
                MK_RULE!(r"//[^\n]*\n?", Action::ConsumeLineComment),
                // Must precede identifiers, or reserved words would lex as ids.
                MK_RULE!(&reserved, Action::Reject),
                MK_RULE!(r"0x[0-9a-f]*", Action::EmitToken(TokenKind::HexLiteral)),
                MK_RULE!(r"[a-zA-Z][a-zA-Z0-9_]*", Action::EmitWord),
                MK_RULE!(r"0|[1-9][0-9]*", Action::EmitToken(TokenKind::DecimalLiteral)),
                MK_RULE!(r"==|!=|<=|>=", Action::EmitToken(TokenKind::Symbol)),
                MK_RULE!(r"[(){}\[\],;]", Action::EmitToken(TokenKind::Symbol)),
                MK_RULE!(r"&&|\|\||[+\-*/%!><=]", Action::EmitToken(TokenKind::Symbol)),
                MK_RULE!(
                    r#""(?:[a-zA-Z0-9 \t\n#_:]|\\"|\\)*""#,
                    Action::EmitToken(TokenKind::StringLiteral)
                ),
            ],
        })
    }

    /// Finds the highest priority rule matching at the start of `remaining`,
    /// returning its index, the rule, and the matched text.
    pub fn first_match<'a, 'src>(
        &'a self,
        remaining: &'src str,
    ) -> Option<(usize, &'a Rule, &'src str)> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.pattern
                .match_prefix(remaining)
                .map(|matched| (index, rule, matched))
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}
