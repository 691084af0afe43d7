//! Report generation module.
//!
//! This module handles:
//! - Ordering aggregated items (class then name, or name only)
//! - Bucketing items into per-class sections
//! - Rendering item lines with their name-dependent suffixes
//! - Exporting the report as JSON
//!
//! # Module Organization
//!
//! - `types` - Layout switches and section model (ReportConfig, ClassSection, LineSuffix)
//! - `render` - Sorting, bucketing and text output
//! - `export` - JSON export

mod export;
mod render;
mod types;

pub use types::ReportConfig;

pub use render::{build_sections, print_report};

pub use export::export_json_report;

#[cfg(test)]
pub(crate) use render::format_report;
