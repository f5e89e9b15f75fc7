//! Token definitions for topic markup
//!
//! Markup is plain text with backslash escapes:
//!
//! - `\b`, `\i`, `\u`, `\p` switch the active run format (bold, italic, underline, plain)
//! - `\\` is a literal backslash
//! - `\a` opens a hyperlink and `\v` delimits its destination
//! - `►` and `◄` are highlight glyphs
//!
//! The tokens are defined using the logos derive macro. Every input character is covered by
//! some token, so lexing never fails.
use logos::Logos;

/// Inline run format. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Bold,
    Italic,
    Underline,
}

impl Format {
    /// HTML element name for this format, `None` for plain text.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Format::Plain => None,
            Format::Bold => Some("b"),
            Format::Italic => Some("i"),
            Format::Underline => Some("u"),
        }
    }
}

/// All possible tokens in topic markup
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MarkupToken {
    #[token(r"\\")]
    EscapedBackslash,

    #[token(r"\b", |_| Format::Bold)]
    #[token(r"\i", |_| Format::Italic)]
    #[token(r"\u", |_| Format::Underline)]
    #[token(r"\p", |_| Format::Plain)]
    FormatSwitch(Format),

    #[token(r"\a")]
    LinkStart,

    #[token(r"\v")]
    Marker,

    #[token("►", |_| '►')]
    #[token("◄", |_| '◄')]
    Highlight(char),

    // A backslash that does not start any known sequence
    #[token("\\")]
    Backslash,

    // Text content (catch-all for non-special characters, newlines included)
    #[regex(r"[^\\►◄]+")]
    Text,
}

/// Lex markup into tokens paired with their source slices.
pub fn tokenize(source: &str) -> Vec<(MarkupToken, &str)> {
    let mut lexer = MarkupToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(MarkupToken::Text);
        tokens.push((token, lexer.slice()));
    }
    tokens
}
