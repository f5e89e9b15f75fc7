//! Fluent assertion API for parsed databases
//!
//! Database tests should check the shape and content of every topic they care about, not just
//! counts. [assert_database] lets a whole database be checked in one expression:
//!
//! ```rust-example
//! use qhelp::qhelp::testing::assert_database;
//!
//! let db = parse_database(".context a\n.context b\nbody\n")?;
//! assert_database(&db)
//!     .topic_count(1)
//!     .topic(0, |t| {
//!         t.contexts(&["a", "b"]).body("body\n").not_toc();
//!     })
//!     .resolves("b", 0);
//! ```

use crate::qhelp::naming;
use crate::qhelp::parsing::Database;
use crate::qhelp::topic::{Topic, TopicId};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a database
pub fn assert_database(db: &Database) -> DatabaseAssertion<'_> {
    DatabaseAssertion { db }
}

// ============================================================================
// Database Assertions
// ============================================================================

pub struct DatabaseAssertion<'a> {
    db: &'a Database,
}

impl<'a> DatabaseAssertion<'a> {
    /// Assert the number of topics in the database
    pub fn topic_count(self, expected: usize) -> Self {
        let actual = self.db.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} topics, found {} topics: [{}]",
            expected,
            actual,
            summarize_topics(self.db)
        );
        self
    }

    /// Assert on a specific topic by discovery index
    pub fn topic<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TopicAssertion<'a>),
    {
        assert!(
            index < self.db.len(),
            "Topic index {} out of bounds (database has {} topics)",
            index,
            self.db.len()
        );
        assertion(TopicAssertion {
            topic: self.db.topic(TopicId(index)),
            context: format!("topics[{}]", index),
        });
        self
    }

    /// Assert that `context` resolves to the topic at `index`
    pub fn resolves(self, context: &str, index: usize) -> Self {
        assert_eq!(
            self.db.lookup_id(context),
            Some(TopicId(index)),
            "Expected context '{}' to resolve to topics[{}]",
            context,
            index
        );
        self
    }

    /// Assert that no topic owns `context`
    pub fn unresolved(self, context: &str) -> Self {
        assert_eq!(
            self.db.lookup_id(context),
            None,
            "Expected context '{}' to be unresolved",
            context
        );
        self
    }

    /// Assert which topic (if any) is the table of contents
    pub fn toc(self, expected: Option<usize>) -> Self {
        assert_eq!(
            self.db.toc_id(),
            expected.map(TopicId),
            "Unexpected table of contents: [{}]",
            summarize_topics(self.db)
        );
        let flagged: Vec<usize> = self
            .db
            .iter()
            .filter(|(_, topic)| topic.is_toc)
            .map(|(id, _)| id.0)
            .collect();
        assert_eq!(
            flagged,
            expected.into_iter().collect::<Vec<_>>(),
            "Topics flagged as table of contents disagree with the database"
        );
        self
    }
}

// ============================================================================
// Topic Assertions
// ============================================================================

pub struct TopicAssertion<'a> {
    topic: &'a Topic,
    context: String,
}

impl<'a> TopicAssertion<'a> {
    pub fn contexts(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.topic.contexts, expected,
            "{}: Unexpected contexts",
            self.context
        );
        self
    }

    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.topic.title.as_deref(),
            expected,
            "{}: Unexpected title",
            self.context
        );
        self
    }

    pub fn category(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.topic.category.as_deref(),
            expected,
            "{}: Unexpected category",
            self.context
        );
        self
    }

    pub fn body(self, expected: &str) -> Self {
        assert_eq!(self.topic.body, expected, "{}: Unexpected body", self.context);
        self
    }

    pub fn body_contains(self, needle: &str) -> Self {
        assert!(
            self.topic.body.contains(needle),
            "{}: Expected body to contain {:?}, body was {:?}",
            self.context,
            needle,
            self.topic.body
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            naming::name(self.topic),
            expected,
            "{}: Unexpected display name",
            self.context
        );
        self
    }

    pub fn filename(self, expected: &str) -> Self {
        assert_eq!(
            naming::filename(self.topic),
            expected,
            "{}: Unexpected filename",
            self.context
        );
        self
    }

    pub fn aliases(self, expected: &[&str]) -> Self {
        assert_eq!(
            naming::alias_filenames(self.topic),
            expected,
            "{}: Unexpected alias filenames",
            self.context
        );
        self
    }

    pub fn is_toc(self) -> Self {
        assert!(self.topic.is_toc, "{}: Expected table of contents", self.context);
        self
    }

    pub fn not_toc(self) -> Self {
        assert!(
            !self.topic.is_toc,
            "{}: Did not expect table of contents",
            self.context
        );
        self
    }
}

fn summarize_topics(db: &Database) -> String {
    db.topics()
        .iter()
        .map(|topic| topic.contexts.join("|"))
        .collect::<Vec<_>>()
        .join(", ")
}
