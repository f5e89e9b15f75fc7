//! Document parser
//!
//! Groups classified lines into topics. The grouping rule is stateful: consecutive `.context`
//! lines attach to the same topic, and any other line closes that run so the next `.context` line
//! opens a new topic.
//!
//! ```text
//! .context a        ← opens topic 1
//! .context b        ← topic 1 (alias)
//! .topic Title      ← topic 1 title, closes the context run
//! body text         ← topic 1 body
//! .context c        ← opens topic 2
//! ```
//!
//! Lines seen before the first `.context` land in a scratch topic that never reaches the
//! database.

use super::directives::Directive;
use super::line_classification::{classify_line, split_lines, Line};
use crate::qhelp::error::ParseError;
use crate::qhelp::topic::Topic;
use tracing::{debug, trace};

/// Where the parser stands relative to context runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Any line may follow; a `.context` line opens a new topic.
    AwaitingLine,
    /// The previous line was `.context`; another one extends the same topic.
    AfterContext,
}

/// Line-at-a-time topic builder.
#[derive(Debug)]
pub struct DocumentParser {
    state: ParserState,
    current: Topic,
    topics: Vec<Topic>,
    line_number: usize,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingLine,
            current: Topic::new(),
            topics: Vec::new(),
            line_number: 0,
        }
    }

    /// Parse a whole decoded document into topics, in discovery order.
    pub fn parse(text: &str) -> Result<Vec<Topic>, ParseError> {
        let mut parser = Self::new();
        for line in split_lines(text) {
            parser.feed_line(line)?;
        }
        Ok(parser.finish())
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Consume one line (without its terminator).
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_number += 1;

        let (name, argument) = match classify_line(line) {
            Line::Text(text) => {
                self.current.push_line(text);
                self.state = ParserState::AwaitingLine;
                return Ok(());
            }
            Line::Directive { name, argument } => (name, argument),
        };

        let directive =
            Directive::from_name(name).ok_or_else(|| ParseError::MalformedDirective {
                directive: name.to_string(),
                line: self.line_number,
            })?;

        match directive {
            Directive::Context => {
                let context = argument.ok_or(ParseError::MissingContext {
                    line: self.line_number,
                })?;
                if self.state == ParserState::AwaitingLine {
                    self.start_topic();
                }
                self.current.add_context(context);
                self.state = ParserState::AfterContext;
                return Ok(());
            }
            Directive::Category => {
                self.current.category = argument.map(str::to_string);
            }
            Directive::Topic => {
                self.current.title = argument.map(str::to_string);
            }
            Directive::Ignored(ignored) => {
                trace!(line = self.line_number, directive = ignored.name(), "ignoring directive");
            }
        }

        self.state = ParserState::AwaitingLine;
        Ok(())
    }

    /// Close the parser and return every topic that declared at least one context.
    pub fn finish(mut self) -> Vec<Topic> {
        let last = std::mem::take(&mut self.current);
        self.commit(last);
        self.topics
    }

    fn start_topic(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.commit(finished);
        debug!(line = self.line_number, "opening topic {}", self.topics.len());
    }

    fn commit(&mut self, topic: Topic) {
        if topic.has_contexts() {
            self.topics.push(topic);
        } else if !topic.body.is_empty() {
            debug!(
                lines = topic.body.lines().count(),
                "discarding text before the first context"
            );
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut parser = DocumentParser::new();
        assert_eq!(parser.state(), ParserState::AwaitingLine);

        parser.feed_line(".context a").unwrap();
        assert_eq!(parser.state(), ParserState::AfterContext);

        parser.feed_line(".context b").unwrap();
        assert_eq!(parser.state(), ParserState::AfterContext);

        parser.feed_line(".freeze 2").unwrap();
        assert_eq!(parser.state(), ParserState::AwaitingLine);

        parser.feed_line(".context c").unwrap();
        parser.feed_line("text").unwrap();
        assert_eq!(parser.state(), ParserState::AwaitingLine);
    }

    #[test]
    fn test_consecutive_contexts_share_a_topic() {
        let topics = DocumentParser::parse(".context a\n.context b\n.context c\nbody\n").unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].contexts, vec!["a", "b", "c"]);
        assert_eq!(topics[0].body, "body\n");
    }

    #[test]
    fn test_interrupted_contexts_open_new_topics() {
        let topics = DocumentParser::parse(".context a\n.topic A\n.context b\n").unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].contexts, vec!["a"]);
        assert_eq!(topics[0].title.as_deref(), Some("A"));
        assert_eq!(topics[1].contexts, vec!["b"]);
        assert_eq!(topics[1].title, None);
    }

    #[test]
    fn test_preamble_is_discarded() {
        let topics =
            DocumentParser::parse("stray text\n.category lost\n.context a\nkept\n").unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].body, "kept\n");
        assert_eq!(topics[0].category, None);
    }

    #[test]
    fn test_category_and_title_overwrite() {
        let topics = DocumentParser::parse(
            ".context a\n.category first\n.category second\n.topic One\n.topic Two\n",
        )
        .unwrap();
        assert_eq!(topics[0].category.as_deref(), Some("second"));
        assert_eq!(topics[0].title.as_deref(), Some("Two"));
    }

    #[test]
    fn test_missing_argument_clears_title() {
        let topics = DocumentParser::parse(".context a\n.topic Name\n.topic\n").unwrap();
        assert_eq!(topics[0].title, None);
    }

    #[test]
    fn test_unknown_directive_is_fatal() {
        let err = DocumentParser::parse(".context a\nok\n.bogus arg\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDirective {
                directive: "bogus".to_string(),
                line: 3,
            }
        );
    }

    #[test]
    fn test_context_without_identifier_is_fatal() {
        let err = DocumentParser::parse("\n.context\n").unwrap_err();
        assert_eq!(err, ParseError::MissingContext { line: 2 });
    }

    #[test]
    fn test_whitespace_only_context_is_empty_identifier() {
        let topics = DocumentParser::parse(".context   \nbody\n").unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].contexts, vec![""]);
        assert_eq!(topics[0].body, "body\n");
    }

    #[test]
    fn test_empty_lines_are_body() {
        let topics = DocumentParser::parse(".context a\n\n\nend").unwrap();
        assert_eq!(topics[0].body, "\n\nend\n");
    }
}
