//! Inline scanner: markup tokens → inline elements
//!
//! A single left-to-right pass over the [MarkupToken] stream produces the [Inline] sequence the
//! emitter consumes. Each rule is decided on the raw tokens, so nothing emitted by one rule can
//! be picked up again by another one:
//!
//! - `\a TEXT \v DEST \v` becomes a [Link]. TEXT runs to the first `\v` and may span lines;
//!   DEST runs to the next `\v` and must stay on one line. Without both markers the `\a` is
//!   literal text.
//! - A `\v … \v` pair that is not part of a link is an annotation: its text, glyphs and both
//!   markers are dropped. Format switches inside it still take effect, so the active format after
//!   the pair is the same as if it had been rendered. A pair holding any other backslash sequence
//!   is not an annotation, and its `\v` is literal text.
//! - `\\` and any backslash that starts no known sequence are literal text.

use super::tokens::{tokenize, Format, MarkupToken};

/// A hyperlink with its (already scanned) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: Vec<Inline>,
    /// Raw destination, exactly as written between the markers.
    pub destination: String,
}

/// One element of the scanned token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Unescaped literal text.
    Text(String),
    /// Switch of the active format.
    Format(Format),
    Link(Link),
    /// A highlight glyph.
    Highlight(char),
}

/// Scan raw topic markup.
pub fn scan(source: &str) -> Vec<Inline> {
    let tokens = tokenize(source);
    scan_tokens(&tokens)
}

fn scan_tokens(tokens: &[(MarkupToken, &str)]) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (token, slice) = tokens[i];
        match token {
            MarkupToken::Text | MarkupToken::Backslash => push_text(&mut inlines, slice),
            MarkupToken::EscapedBackslash => push_text(&mut inlines, "\\"),
            MarkupToken::FormatSwitch(format) => inlines.push(Inline::Format(format)),
            MarkupToken::Highlight(glyph) => inlines.push(Inline::Highlight(glyph)),
            MarkupToken::LinkStart => {
                if let Some((link, next)) = match_link(tokens, i) {
                    inlines.push(Inline::Link(link));
                    i = next;
                    continue;
                }
                push_text(&mut inlines, slice);
            }
            MarkupToken::Marker => {
                if let Some((switches, next)) = match_annotation(tokens, i) {
                    inlines.extend(switches.into_iter().map(Inline::Format));
                    i = next;
                    continue;
                }
                push_text(&mut inlines, slice);
            }
        }
        i += 1;
    }

    inlines
}

/// Try to read a link starting at the `\a` token at `start`.
///
/// Returns the link and the index of the first token after it.
fn match_link(tokens: &[(MarkupToken, &str)], start: usize) -> Option<(Link, usize)> {
    let text_end = next_marker(tokens, start + 1)?;
    let destination_end = next_marker(tokens, text_end + 1)?;

    let destination: String = tokens[text_end + 1..destination_end]
        .iter()
        .map(|(_, slice)| *slice)
        .collect();
    if destination.contains('\n') {
        return None;
    }

    let link = Link {
        text: scan_tokens(&tokens[start + 1..text_end]),
        destination,
    };
    Some((link, destination_end + 1))
}

/// Try to read an annotation pair starting at the `\v` token at `start`.
///
/// Returns the format switches found inside the pair and the index of the first token after the
/// closing marker.
fn match_annotation(
    tokens: &[(MarkupToken, &str)],
    start: usize,
) -> Option<(Vec<Format>, usize)> {
    let mut switches = Vec::new();
    for (offset, (token, _)) in tokens[start + 1..].iter().enumerate() {
        match token {
            MarkupToken::Marker => return Some((switches, start + 1 + offset + 1)),
            MarkupToken::FormatSwitch(format) => switches.push(*format),
            MarkupToken::Text | MarkupToken::Highlight(_) => continue,
            _ => return None,
        }
    }
    None
}

fn next_marker(tokens: &[(MarkupToken, &str)], from: usize) -> Option<usize> {
    tokens
        .get(from..)?
        .iter()
        .position(|(token, _)| *token == MarkupToken::Marker)
        .map(|offset| from + offset)
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text(run)) = inlines.last_mut() {
        run.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_string()));
    }
}
