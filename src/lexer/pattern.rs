use regex::Regex;

use crate::errors::errors::{ErrorImpl, LexicalError};

/// A regular expression that only ever matches at the start of its input.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Result<Pattern, LexicalError> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|err| {
            LexicalError::unpositioned(ErrorImpl::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
        })?;

        Ok(Pattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns the prefix of `remaining` this pattern matches, if any.
    pub fn match_prefix<'src>(&self, remaining: &'src str) -> Option<&'src str> {
        self.regex.find(remaining).map(|found| found.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::Pattern;

    #[test]
    fn test_match_is_anchored() {
        let digits = Pattern::compile("[0-9]+").unwrap();

        assert_eq!(digits.match_prefix("123abc"), Some("123"));
        assert_eq!(digits.match_prefix("abc123"), None);
    }

    #[test]
    fn test_match_is_greedy_within_pattern() {
        let digits = Pattern::compile("[0-9]+").unwrap();

        assert_eq!(digits.match_prefix("98765 4"), Some("98765"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        // Without grouping, `^a|b` would let `b` match anywhere.
        let pattern = Pattern::compile("a|b").unwrap();

        assert_eq!(pattern.match_prefix("xb"), None);
        assert_eq!(pattern.match_prefix("bx"), Some("b"));
    }

    #[test]
    fn test_alternation_takes_first_branch() {
        let pattern = Pattern::compile("0|[1-9][0-9]*").unwrap();

        assert_eq!(pattern.match_prefix("0123"), Some("0"));
        assert_eq!(pattern.match_prefix("123"), Some("123"));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let error = Pattern::compile("[a-z").unwrap_err();

        assert_eq!(error.get_error_name(), "InvalidPattern");
        assert_eq!(error.get_position(), None);
    }

    #[test]
    fn test_keeps_pattern_source() {
        let pattern = Pattern::compile("==|!=").unwrap();

        assert_eq!(pattern.as_str(), "==|!=");
    }
}
