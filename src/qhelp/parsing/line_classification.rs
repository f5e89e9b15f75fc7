//! Line Classification
//!
//! Splits decoded text into lines and decides whether each line is a directive or body text.
//!
//! A directive is a line that starts with `.` followed by one or more lowercase ASCII letters.
//! Anything after the name that is separated by ASCII whitespace is the argument, possibly empty.
//! The match is anchored at the start of the line only, so `.topic:x` is still the `topic`
//! directive (with no argument), while `.Topic` or `.42` are plain body text.
//!
//! Only ASCII whitespace separates a name from its argument. A decoded no-break space (byte
//! 0xFF) is argument-less text after the name, like any other non-letter.

use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.([a-z]+)(?:(?-u:\s)+(.*))?").unwrap());

/// A classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Body text, without its line terminator.
    Text(&'a str),
    /// A directive. `argument` is `None` when no whitespace follows the name and `Some("")` when
    /// only whitespace does.
    Directive {
        name: &'a str,
        argument: Option<&'a str>,
    },
}

/// Classify one line (without its terminator).
pub fn classify_line(line: &str) -> Line<'_> {
    match DIRECTIVE_REGEX.captures(line) {
        Some(captures) => {
            // Group 1 always participates in a match.
            let name = captures.get(1).map_or("", |m| m.as_str());
            let argument = captures.get(2).map(|m| m.as_str());
            Line::Directive { name, argument }
        }
        None => Line::Text(line),
    }
}

/// Iterate over the lines of `text`, accepting `\r\n`, `\r` and `\n` as terminators.
///
/// A terminator at the very end of the text does not produce a trailing empty line.
pub fn split_lines(text: &str) -> SourceLines<'_> {
    SourceLines { rest: text }
}

/// Iterator returned by [split_lines].
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator_len = if self.rest[end..].starts_with("\r\n") {
            2
        } else {
            1
        };
        self.rest = &self.rest[end + terminator_len..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_text_line() {
        assert_eq!(classify_line("Hello world"), Line::Text("Hello world"));
        assert_eq!(classify_line(""), Line::Text(""));
    }

    #[test]
    fn test_classify_directive_with_argument() {
        assert_eq!(
            classify_line(".context  h.contents"),
            Line::Directive {
                name: "context",
                argument: Some("h.contents"),
            }
        );
    }

    #[test]
    fn test_argument_keeps_trailing_whitespace() {
        assert_eq!(
            classify_line(".topic Editing Keys  "),
            Line::Directive {
                name: "topic",
                argument: Some("Editing Keys  "),
            }
        );
    }

    #[test]
    fn test_classify_directive_without_argument() {
        assert_eq!(
            classify_line(".end"),
            Line::Directive {
                name: "end",
                argument: None,
            }
        );
    }

    #[test]
    fn test_whitespace_only_argument_is_empty() {
        assert_eq!(
            classify_line(".context   "),
            Line::Directive {
                name: "context",
                argument: Some(""),
            }
        );
    }

    #[test]
    fn test_no_break_space_does_not_separate_argument() {
        assert_eq!(
            classify_line(".topic\u{A0}Foo"),
            Line::Directive {
                name: "topic",
                argument: None,
            }
        );
        assert_eq!(
            classify_line(".topic \u{A0}Foo"),
            Line::Directive {
                name: "topic",
                argument: Some("\u{A0}Foo"),
            }
        );
    }

    #[test]
    fn test_directive_name_ends_at_first_non_letter() {
        assert_eq!(
            classify_line(".topic:Foo"),
            Line::Directive {
                name: "topic",
                argument: None,
            }
        );
    }

    #[test]
    fn test_non_directive_dot_lines_are_text() {
        assert_eq!(classify_line(".Topic Foo"), Line::Text(".Topic Foo"));
        assert_eq!(classify_line(".42"), Line::Text(".42"));
        assert_eq!(classify_line("."), Line::Text("."));
        assert_eq!(classify_line(" .topic x"), Line::Text(" .topic x"));
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        let lines: Vec<_> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b"]);
        assert_eq!(split_lines("").count(), 0);
    }
}
