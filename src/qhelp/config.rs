//! Configuration loading
//!
//! Settings come from three layers, lowest priority first:
//!
//! 1. `defaults/qhelp.default.toml`, embedded at build time;
//! 2. a TOML file, either passed explicitly or found as [PROJECT_CONFIG_FILE];
//! 3. single-key overrides.
//!
//! [Loader] stacks them and deserializes the result into [QhelpConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/qhelp.default.toml");

/// Top-level configuration consumed by the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QhelpConfig {
    pub parsing: ParsingConfig,
    pub rendering: RenderingConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub toc_marker: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            toc_marker: crate::qhelp::parsing::DEFAULT_TOC_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderingConfig {
    pub highlight_class: String,
    pub back_destinations: Vec<String>,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            highlight_class: "grhilite".to_string(),
            back_destinations: vec!["!B".to_string(), "!cq.hb".to_string()],
        }
    }
}

/// Output layout knobs for the site writer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub stylesheet: String,
    pub topic_list: String,
    pub create_output_dir: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stylesheet: "../style.css".to_string(),
            topic_list: "TOPIC_LIST.html".to_string(),
            create_output_dir: true,
        }
    }
}

/// Settings file picked up from the working directory when no `--config` is given.
pub const PROJECT_CONFIG_FILE: &str = "qhelp.toml";

/// Stacks settings sources over the embedded defaults; later sources win key by key.
#[derive(Debug)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Sources for one conversion run.
    ///
    /// An explicit file must exist. Without one, [PROJECT_CONFIG_FILE] in `working_dir` is used
    /// when present.
    pub fn for_run(explicit: Option<&Path>, working_dir: &Path) -> Self {
        match explicit {
            Some(path) => Self::new().with_file(path),
            None => Self::new().with_optional_file(working_dir.join(PROJECT_CONFIG_FILE)),
        }
    }

    /// Add a TOML file; building fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override one dotted key such as `rendering.highlight_class`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<QhelpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
