//! Topic: the addressable unit of help content
//!
//! A topic owns one or more contexts (the first declared is not necessarily canonical, see
//! [naming](crate::qhelp::naming)), an optional explicit title and category, and the raw markup of
//! its body. Topics are built by the parser and are read-only afterwards.

/// Index of a topic within [Database::topics](crate::qhelp::parsing::Database::topics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(pub usize);

/// One help topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    /// Context identifiers in declaration order.
    pub contexts: Vec<String>,
    /// Explicit display name set by `.topic`.
    pub title: Option<String>,
    /// Tag set by `.category`; the last directive wins.
    pub category: Option<String>,
    /// Raw markup, one `\n`-terminated line per source body line.
    pub body: String,
    /// Whether this topic was selected as the table of contents.
    pub is_toc: bool,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a topic from its contexts and body (handy for tests and tooling).
    pub fn with_contexts<I, S>(contexts: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contexts: contexts.into_iter().map(Into::into).collect(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn add_context(&mut self, context: impl Into<String>) {
        self.contexts.push(context.into());
    }

    /// Append one body line and its terminating newline.
    pub fn push_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }

    pub fn has_contexts(&self) -> bool {
        !self.contexts.is_empty()
    }

    /// The explicit title, if one was set and is non-empty.
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }
}
