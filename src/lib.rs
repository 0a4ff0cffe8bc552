#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::{
    config::LexerConfig,
    errors::errors::{DriverError, ErrorTip, LexicalError},
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Returns the 1-based line number, the text of that line, and the column of
/// `offset` within it.
pub fn get_line_at_offset(source: &str, offset: usize) -> Option<(usize, &str, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((line_number, line, offset - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Reads a source file, refusing files larger than the configured limit.
pub fn read_source(path: &Path, config: &LexerConfig) -> Result<String, DriverError> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if source.len() > config.max_source_len {
        return Err(DriverError::SourceTooLarge {
            path: path.display().to_string(),
            len: source.len(),
            max: config.max_source_len,
        });
    }

    Ok(source)
}

pub fn render_error(error: &LexicalError, source: &str, file_name: &str) -> String {
    /*
        Error: InvalidToken (Unexpected character `^`)
        -> test.decaf
          |
        3 | int x = ^;
          | --------^
    */

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error, error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", file_name));

    let Some((line, line_text, line_pos)) = error
        .offset()
        .and_then(|offset| get_line_at_offset(source, offset))
    else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|byte| *byte == b' ' || *byte == b'\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_get_line_at_offset() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_offset(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_offset(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_offset(source, source.len()).is_none());
    }

    #[test]
    fn test_render_error() {
        let source = "int x;\n    x = ^;\n";
        let error = tokenize(source).unwrap_err();

        assert_eq!(
            render_error(&error, source, "test.decaf"),
            "Error: Invalid token! (Unexpected character `^`)\n\
             -> test.decaf\n  \
               |\n\
             2 | x = ^;\n  \
               | ----^\n"
        );
    }

    #[test]
    fn test_render_error_without_position() {
        let error = crate::lexer::pattern::Pattern::compile("(").unwrap_err();
        let rendered = render_error(&error, "", "test.decaf");

        assert!(rendered.starts_with("Error: invalid pattern \"(\""));
        assert!(rendered.ends_with("-> test.decaf\n"));
    }
}
