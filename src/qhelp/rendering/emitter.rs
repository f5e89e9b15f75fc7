//! HTML emission for scanned inline elements
//!
//! The emitter keeps a single "current format" slot, not a stack. Switching closes the active
//! element (unless plain) and opens the new one (unless plain), so switching to the format that
//! is already active closes and reopens it. The slot is shared between link text and the
//! surrounding body, exactly as the markup is written.

use super::links::{self, LinkTarget};
use super::scanner::{Inline, Link};
use super::tokens::Format;
use crate::qhelp::config::RenderingConfig;
use crate::qhelp::parsing::Database;
use html_escape::{encode_single_quoted_attribute_to_string, encode_text_to_string};

/// Stateful writer that turns [Inline]s into an HTML fragment.
pub struct HtmlEmitter<'a> {
    db: &'a Database,
    config: &'a RenderingConfig,
    current: Format,
    out: String,
}

impl<'a> HtmlEmitter<'a> {
    pub fn new(db: &'a Database, config: &'a RenderingConfig) -> Self {
        Self {
            db,
            config,
            current: Format::Plain,
            out: String::new(),
        }
    }

    pub fn emit_all(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.emit(inline);
        }
    }

    pub fn emit(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) => {
                encode_text_to_string(text, &mut self.out);
            }
            Inline::Format(format) => self.switch_format(*format),
            Inline::Highlight(glyph) => {
                self.out.push_str("<span class='");
                encode_single_quoted_attribute_to_string(
                    &self.config.highlight_class,
                    &mut self.out,
                );
                self.out.push_str("'>");
                self.out.push(*glyph);
                self.out.push_str("</span>");
            }
            Inline::Link(link) => self.emit_link(link),
        }
    }

    /// The format active at this point of the output.
    pub fn current_format(&self) -> Format {
        self.current
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn switch_format(&mut self, format: Format) {
        if let Some(tag) = self.current.tag() {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
        }
        if let Some(tag) = format.tag() {
            self.out.push('<');
            self.out.push_str(tag);
            self.out.push('>');
        }
        self.current = format;
    }

    fn emit_link(&mut self, link: &Link) {
        let target: LinkTarget =
            links::resolve(&link.destination, self.db, &self.config.back_destinations);
        self.out.push_str("<a href='");
        encode_single_quoted_attribute_to_string(target.href(), &mut self.out);
        self.out.push_str("'>");
        self.emit_all(&link.text);
        self.out.push_str("</a>");
    }
}
