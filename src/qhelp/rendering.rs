//! Rendering: topic markup → HTML fragment
//!
//! Rendering is split into two independent passes:
//!
//! 1. [scanner::scan] lexes the raw body (see [tokens]) and builds an [Inline] stream of literal
//!    runs, format switches, links and highlight glyphs.
//! 2. [emitter::HtmlEmitter] walks that stream, tracks the active format, resolves link
//!    destinations against the [Database] and writes HTML.
//!
//! The fragment is meant to be placed inside a `<pre>` element; whitespace and newlines are
//! preserved verbatim.

pub mod emitter;
pub mod escape;
pub mod links;
pub mod scanner;
pub mod tokens;

pub use emitter::HtmlEmitter;
pub use links::LinkTarget;
pub use scanner::{scan, Inline, Link};
pub use tokens::Format;

use crate::qhelp::config::RenderingConfig;
use crate::qhelp::naming;
use crate::qhelp::parsing::Database;
use crate::qhelp::topic::Topic;

/// Everything the site writer needs for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTopic {
    /// Primary output filename.
    pub filename: String,
    /// Filenames that must redirect to `filename`.
    pub aliases: Vec<String>,
    /// Display name, not yet HTML-escaped.
    pub title: String,
    /// HTML fragment for the body.
    pub body: String,
    pub is_toc: bool,
}

/// Render a topic body with the default settings.
pub fn render_topic(topic: &Topic, db: &Database) -> String {
    render_topic_with(topic, db, &RenderingConfig::default())
}

/// Render a topic body.
pub fn render_topic_with(topic: &Topic, db: &Database, config: &RenderingConfig) -> String {
    let inlines = scan(&topic.body);
    let mut emitter = HtmlEmitter::new(db, config);
    emitter.emit_all(&inlines);
    emitter.finish()
}

/// Render every topic in discovery order with the default settings.
pub fn render_database(db: &Database) -> Vec<RenderedTopic> {
    render_database_with(db, &RenderingConfig::default())
}

/// Render every topic in discovery order.
pub fn render_database_with(db: &Database, config: &RenderingConfig) -> Vec<RenderedTopic> {
    db.topics()
        .iter()
        .map(|topic| RenderedTopic {
            filename: naming::filename(topic),
            aliases: naming::alias_filenames(topic),
            title: naming::name(topic).to_string(),
            body: render_topic_with(topic, db, config),
            is_toc: topic.is_toc,
        })
        .collect()
}
