//! Parsing: decoded text → [Database]
//!
//! Parsing runs in two steps:
//!
//! 1. [parser::DocumentParser] classifies each line and groups lines into topics.
//! 2. [Database::from_topics] builds the context index and selects the table of contents.
//!
//! An unknown directive anywhere in the input fails the whole parse.

pub mod database;
pub mod directives;
pub mod line_classification;
pub mod parser;

pub use database::{Database, DEFAULT_TOC_MARKER};
pub use directives::{Directive, IgnoredDirective};
pub use line_classification::{classify_line, split_lines, Line};
pub use parser::{DocumentParser, ParserState};

use crate::qhelp::config::ParsingConfig;
use crate::qhelp::decoding;
use crate::qhelp::error::ParseError;

/// Parse decoded text with the default settings.
pub fn parse_database(text: &str) -> Result<Database, ParseError> {
    parse_database_with(text, &ParsingConfig::default())
}

/// Parse decoded text with explicit settings.
pub fn parse_database_with(text: &str, config: &ParsingConfig) -> Result<Database, ParseError> {
    let topics = DocumentParser::parse(text)?;
    Ok(Database::from_topics(topics, &config.toc_marker))
}

/// Decode raw bytes and parse them.
pub fn parse_bytes(bytes: &[u8], config: &ParsingConfig) -> Result<Database, ParseError> {
    parse_database_with(&decoding::decode(bytes), config)
}
