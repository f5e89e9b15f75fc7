//! Site generation: rendered topics → files on disk
//!
//! The site is planned completely in memory first ([plan_site]) and only then written
//! ([write_site]), so a failure while parsing or rendering never leaves partial output behind.
//!
//! For each topic, in discovery order, the plan holds:
//!
//! - the topic page, under the topic's primary filename;
//! - one redirect stub per alias filename, pointing at the primary filename.
//!
//! A sorted topic list closes the plan. Files are written in plan order, so when two entries
//! share a filename the later one wins.

use crate::qhelp::config::{QhelpConfig, SiteConfig};
use crate::qhelp::error::{ConvertError, Result};
use crate::qhelp::naming;
use crate::qhelp::parsing::{parse_bytes, Database};
use crate::qhelp::rendering::{render_database_with, RenderedTopic};
use html_escape::{encode_double_quoted_attribute, encode_single_quoted_attribute, encode_text};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a planned file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Topic,
    Redirect,
    TopicList,
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub filename: String,
    pub kind: FileKind,
    pub contents: String,
}

/// Every file of a site, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePlan {
    pub files: Vec<SiteFile>,
}

impl SitePlan {
    pub fn get(&self, filename: &str) -> Option<&SiteFile> {
        self.files.iter().rev().find(|file| file.filename == filename)
    }

    pub fn count(&self, kind: FileKind) -> usize {
        self.files.iter().filter(|file| file.kind == kind).count()
    }
}

/// What [write_site] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSummary {
    pub topics: usize,
    pub redirects: usize,
    pub written: Vec<PathBuf>,
}

/// An entry of the topic list page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TopicListEntry {
    pub name: String,
    pub filename: String,
}

/// Full HTML page for one topic.
pub fn topic_page(topic: &RenderedTopic, stylesheet: &str) -> String {
    format!(
        "<html>\n\n<head>\n<title>{title}</title>\n<link rel=\"stylesheet\" href=\"{stylesheet}\">\n</head>\n\n<body>\n<pre>\n{body}\n</pre>\n</body>\n\n</html>\n",
        title = encode_text(&topic.title),
        stylesheet = encode_double_quoted_attribute(stylesheet),
        body = topic.body,
    )
}

/// Redirect stub that sends the browser to `target`.
pub fn redirect_page(target: &str) -> String {
    format!(
        "<html>\n\n<head>\n<title> Page redirect </title>\n<meta http-equiv=\"Refresh\" content=\"0; url={}\" />\n</head>\n\n</html>\n",
        encode_double_quoted_attribute(target)
    )
}

/// Every topic's (name, filename), sorted by name then filename.
pub fn topic_list(db: &Database) -> Vec<TopicListEntry> {
    let mut entries: Vec<_> = db
        .topics()
        .iter()
        .map(|topic| TopicListEntry {
            name: naming::name(topic).to_string(),
            filename: naming::filename(topic),
        })
        .collect();
    entries.sort();
    entries
}

/// The "List of Topics" page.
pub fn topic_list_page(entries: &[TopicListEntry]) -> String {
    let items = entries
        .iter()
        .map(|entry| {
            format!(
                "<li> <a href='{}'>{}</a>",
                encode_single_quoted_attribute(&entry.filename),
                encode_text(&entry.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<html>\n\n<head>\n<title> List of Topics </title>\n</head>\n\n<body>\n<h1> List of Topics </h1>\n<ul>\n{items}\n</ul>\n\n</body>\n\n</html>\n"
    )
}

/// Render every page of the site in memory.
pub fn plan_site(db: &Database, config: &QhelpConfig) -> SitePlan {
    let mut files = Vec::new();

    for topic in render_database_with(db, &config.rendering) {
        files.push(SiteFile {
            filename: topic.filename.clone(),
            kind: FileKind::Topic,
            contents: topic_page(&topic, &config.site.stylesheet),
        });
        for alias in &topic.aliases {
            files.push(SiteFile {
                filename: alias.clone(),
                kind: FileKind::Redirect,
                contents: redirect_page(&topic.filename),
            });
        }
    }

    files.push(SiteFile {
        filename: config.site.topic_list.clone(),
        kind: FileKind::TopicList,
        contents: topic_list_page(&topic_list(db)),
    });

    let mut seen = HashSet::new();
    for file in &files {
        if !seen.insert(file.filename.as_str()) {
            warn!(filename = %file.filename, "output filename used more than once; the last one wins");
        }
    }

    SitePlan { files }
}

/// Write a planned site into `out_dir`.
pub fn write_site(plan: &SitePlan, out_dir: &Path, config: &SiteConfig) -> Result<SiteSummary> {
    if config.create_output_dir {
        fs::create_dir_all(out_dir).map_err(|source| ConvertError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }

    let mut summary = SiteSummary {
        topics: plan.count(FileKind::Topic),
        redirects: plan.count(FileKind::Redirect),
        written: Vec::with_capacity(plan.files.len()),
    };
    for file in &plan.files {
        let path = out_dir.join(&file.filename);
        fs::write(&path, file.contents.as_bytes()).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;
        summary.written.push(path);
    }

    info!(
        topics = summary.topics,
        redirects = summary.redirects,
        out_dir = %out_dir.display(),
        "site written"
    );
    Ok(summary)
}

/// Read, decode, parse, render and write a help database in one go.
pub fn convert_file(input: &Path, out_dir: &Path, config: &QhelpConfig) -> Result<SiteSummary> {
    let bytes = fs::read(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let db = parse_bytes(&bytes, &config.parsing)?;
    info!(
        topics = db.len(),
        contexts = db.context_count(),
        "parsed {}",
        input.display()
    );
    let plan = plan_site(&db, config);
    write_site(&plan, out_dir, &config.site)
}
