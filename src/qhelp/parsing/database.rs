//! The parsed help database
//!
//! Holds every topic in discovery order plus the context index. Both are fixed once
//! [Database::from_topics] returns.
//!
//! Ordering
//!
//!     The index is built by walking topics in discovery order and each topic's contexts in
//!     declaration order; a context declared by two topics therefore belongs to the later one.
//!     The earlier topic keeps the context in its own list but can no longer be reached through
//!     it.
//!
//!     The table of contents is chosen by scanning the index keys in the order they were first
//!     inserted (the same walk, keeping only each context's first declaration). The first key
//!     that contains the ToC marker wins, and the ToC is whichever topic owns that key.

use crate::qhelp::topic::{Topic, TopicId};
use std::collections::HashMap;
use tracing::warn;

/// Default substring that marks the table-of-contents context.
pub const DEFAULT_TOC_MARKER: &str = "contents";

#[derive(Debug, Clone, Default)]
pub struct Database {
    topics: Vec<Topic>,
    index: HashMap<String, TopicId>,
    toc: Option<TopicId>,
}

impl Database {
    /// Index `topics` and select the table of contents.
    pub fn from_topics(mut topics: Vec<Topic>, toc_marker: &str) -> Self {
        let index = build_index(&topics);
        let toc = find_toc(&topics, &index, toc_marker);
        match toc {
            Some(id) => topics[id.0].is_toc = true,
            None => warn!(
                marker = toc_marker,
                "no table of contents found; the site will have no root page"
            ),
        }
        Self { topics, index, toc }
    }

    /// All topics in discovery order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, id: TopicId) -> &Topic {
        &self.topics[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TopicId, &Topic)> {
        self.topics
            .iter()
            .enumerate()
            .map(|(i, topic)| (TopicId(i), topic))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Resolve a context to the topic that owns it.
    pub fn lookup(&self, context: &str) -> Option<&Topic> {
        self.lookup_id(context).map(|id| self.topic(id))
    }

    pub fn lookup_id(&self, context: &str) -> Option<TopicId> {
        self.index.get(context).copied()
    }

    /// Number of distinct contexts in the index.
    pub fn context_count(&self) -> usize {
        self.index.len()
    }

    pub fn toc(&self) -> Option<&Topic> {
        self.toc.map(|id| self.topic(id))
    }

    pub fn toc_id(&self) -> Option<TopicId> {
        self.toc
    }
}

fn build_index(topics: &[Topic]) -> HashMap<String, TopicId> {
    let mut index = HashMap::new();
    for (i, topic) in topics.iter().enumerate() {
        for context in &topic.contexts {
            index.insert(context.clone(), TopicId(i));
        }
    }
    index
}

fn find_toc(topics: &[Topic], index: &HashMap<String, TopicId>, marker: &str) -> Option<TopicId> {
    // The first declaration of a key is also its first match, so no dedup is needed.
    topics
        .iter()
        .flat_map(|topic| &topic.contexts)
        .find(|context| context.contains(marker))
        .and_then(|context| index.get(context).copied())
}
