//! Hyperlink destination resolution
//!
//! A destination is resolved in this order:
//!
//! 1. one of the configured "go back" tokens → browser history navigation;
//! 2. no `!` → a context in this database, or a visible `unknown#<dest>` placeholder;
//! 3. `<file>!<context>` → a page in the sibling site generated from `<file>`.

use super::escape::unescape_entities;
use crate::qhelp::naming;
use crate::qhelp::parsing::Database;
use tracing::debug;

/// Href used for back-navigation links.
pub const HISTORY_BACK: &str = "javascript:history.back();";

/// Prefix for destinations that match no context.
pub const UNKNOWN_PREFIX: &str = "unknown#";

/// Where a hyperlink points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Navigate back in browser history.
    Back,
    /// A topic in this database, by its primary filename.
    Topic(String),
    /// A context that no topic declares.
    Unknown(String),
    /// A context in another help file.
    External { file: String, context: String },
}

impl LinkTarget {
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Back => HISTORY_BACK.to_string(),
            LinkTarget::Topic(filename) => filename.clone(),
            LinkTarget::Unknown(destination) => format!("{UNKNOWN_PREFIX}{destination}"),
            LinkTarget::External { file, context } => format!(
                "../{}/{}",
                file.to_lowercase(),
                naming::filename_for_context(context)
            ),
        }
    }
}

/// Resolve a raw (not yet entity-decoded) destination.
pub fn resolve(raw_destination: &str, db: &Database, back_destinations: &[String]) -> LinkTarget {
    let destination = unescape_entities(raw_destination);

    if back_destinations.iter().any(|back| *back == destination) {
        return LinkTarget::Back;
    }

    match destination.split_once('!') {
        None => match db.lookup(&destination) {
            Some(topic) => LinkTarget::Topic(naming::filename(topic)),
            None => {
                debug!(destination = %destination, "unresolved link destination");
                LinkTarget::Unknown(destination)
            }
        },
        Some((file, context)) => LinkTarget::External {
            file: file.to_string(),
            context: context.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qhelp::parsing::parse_database;

    fn back() -> Vec<String> {
        vec!["!B".to_string(), "!cq.hb".to_string()]
    }

    fn sample() -> Database {
        parse_database(".context h.contents\ntoc\n.context h.keys\n.context @k1\nkeys\n").unwrap()
    }

    #[test]
    fn test_back_tokens() {
        let db = sample();
        assert_eq!(resolve("!B", &db, &back()), LinkTarget::Back);
        assert_eq!(resolve("!cq.hb", &db, &back()), LinkTarget::Back);
        assert_eq!(LinkTarget::Back.href(), "javascript:history.back();");
    }

    #[test]
    fn test_local_context() {
        let db = sample();
        assert_eq!(
            resolve("@k1", &db, &back()),
            LinkTarget::Topic("h_dot_keys.html".to_string())
        );
        assert_eq!(
            resolve("h.contents", &db, &back()),
            LinkTarget::Topic("index.html".to_string())
        );
    }

    #[test]
    fn test_unknown_context() {
        let db = sample();
        let target = resolve("NOPE", &db, &back());
        assert_eq!(target, LinkTarget::Unknown("NOPE".to_string()));
        assert_eq!(target.href(), "unknown#NOPE");
    }

    #[test]
    fn test_external_context() {
        let db = sample();
        let target = resolve("QBASIC.HLP!h.contents", &db, &back());
        assert_eq!(
            target,
            LinkTarget::External {
                file: "QBASIC.HLP".to_string(),
                context: "h.contents".to_string(),
            }
        );
        assert_eq!(target.href(), "../qbasic.hlp/h_dot_contents.html");
    }

    #[test]
    fn test_external_splits_on_first_bang() {
        let db = sample();
        assert_eq!(
            resolve("a!b!c", &db, &back()).href(),
            "../a/b!c.html"
        );
    }

    #[test]
    fn test_entities_are_decoded_before_lookup() {
        let db = parse_database(".context a&b\nx\n").unwrap();
        assert_eq!(
            resolve("a&amp;b", &db, &back()),
            LinkTarget::Topic("a_amp_b.html".to_string())
        );
    }
}
