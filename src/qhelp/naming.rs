//! Stable names and filenames for topics
//!
//! Every topic gets one primary output file plus a redirect stub for each of its other contexts.
//! The primary file is derived from the topic's "prettiest" context, which is the one most
//! likely to have been written by a person:
//!
//! - contexts starting with `@` are local addresses and are only used when nothing else exists;
//! - among the candidates, the one with the fewest ASCII digits wins;
//! - ties go to the earliest declared.
//!
//! Filenames
//!
//!     Characters that are unsafe in filenames or URLs are replaced with fixed tokens (see
//!     [escape_char]). A name that would start with `_` gets an `x` prefix, since static hosts
//!     such as GitHub Pages hide underscore-prefixed files. The table of contents is always
//!     written to [ROOT_FILENAME]; a context literally named "index" is moved out of its way.

use crate::qhelp::topic::Topic;

/// Filename of the site root (the table of contents).
pub const ROOT_FILENAME: &str = "index.html";

/// Prefix for contexts that would otherwise collide with [ROOT_FILENAME].
pub const RESERVED_INDEX_PREFIX: &str = "ACTUALLY_NAMED_";

/// Extension appended to every generated filename.
pub const HTML_EXTENSION: &str = ".html";

/// Replacement token for a character that cannot appear verbatim in a filename.
pub fn escape_char(c: char) -> Option<&'static str> {
    let token = match c {
        '\\' => "_bksl_",
        '/' => "_sl_",
        '"' => "_dqt_",
        '\'' => "_qt_",
        ',' => "_cm_",
        ':' => "_cln_",
        '&' => "_amp_",
        '<' => "_lt_",
        '>' => "_gt_",
        '#' => "_hash_",
        '.' => "_dot_",
        '@' => "_at_",
        ' ' => "_",
        _ => return None,
    };
    Some(token)
}

/// Output filename for a single context.
pub fn filename_for_context(context: &str) -> String {
    if context.eq_ignore_ascii_case("index") {
        return format!("{RESERVED_INDEX_PREFIX}{context}{HTML_EXTENSION}");
    }

    let mut escaped = String::with_capacity(context.len() + HTML_EXTENSION.len());
    for c in context.chars() {
        match escape_char(c) {
            Some(token) => escaped.push_str(token),
            None => escaped.push(c),
        }
    }
    if escaped.starts_with('_') {
        escaped.insert(0, 'x');
    }
    escaped.push_str(HTML_EXTENSION);
    escaped
}

/// Pick the context with the fewest digits; the first one wins ties.
fn least_numeric<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let digits = candidate.chars().filter(char::is_ascii_digit).count();
        if best.map_or(true, |(_, fewest)| digits < fewest) {
            best = Some((candidate.as_str(), digits));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// The context used to derive a topic's primary filename and fallback name.
///
/// Returns an empty string only for a topic without contexts, which the parser never produces.
pub fn prettiest_context(topic: &Topic) -> &str {
    let global = topic.contexts.iter().filter(|c| !c.starts_with('@'));
    least_numeric(global)
        .or_else(|| least_numeric(&topic.contexts))
        .unwrap_or("")
}

/// Display name: the explicit title, or the prettiest context.
pub fn name(topic: &Topic) -> &str {
    topic
        .explicit_title()
        .unwrap_or_else(|| prettiest_context(topic))
}

/// Primary output filename.
pub fn filename(topic: &Topic) -> String {
    if topic.is_toc {
        ROOT_FILENAME.to_string()
    } else {
        filename_for_context(prettiest_context(topic))
    }
}

/// Filenames that must redirect to [filename].
///
/// That is every context except the canonical one; for the table of contents the canonical
/// context is included as well, since its primary file is [ROOT_FILENAME].
pub fn alias_filenames(topic: &Topic) -> Vec<String> {
    let canonical = prettiest_context(topic);
    topic
        .contexts
        .iter()
        .filter(|context| topic.is_toc || context.as_str() != canonical)
        .map(|context| filename_for_context(context))
        .collect()
}
