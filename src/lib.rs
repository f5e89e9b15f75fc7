//! # qhelp
//!
//! Converts a legacy QuickHelp-style help database into a static HTML site.
//!
//! The pipeline is: bytes → [decoding](qhelp::decoding) → text →
//! [parsing](qhelp::parsing) → [Database](qhelp::parsing::Database) →
//! [naming](qhelp::naming) + [rendering](qhelp::rendering) → [site](qhelp::site).
//!
//! ## Testing
//!
//! Database-level tests should use the fluent [assert_database](qhelp::testing::assert_database)
//! API rather than poking at topic vectors by hand.

pub mod qhelp;

pub use qhelp::error::{ConvertError, ParseError};
pub use qhelp::parsing::{parse_database, Database};
pub use qhelp::rendering::{render_database, render_topic, RenderedTopic};
pub use qhelp::topic::Topic;
