//! JSON export of the report.
//!
//! Mirrors the text report section by section and adds the character list
//! and diagnostic counts so runs can be compared by tooling.

use super::render::render_item_line;
use super::types::{ClassSection, ReportConfig};
use crate::types::{Character, Diagnostic};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Count diagnostics by kind, keyed by `Diagnostic::kind`.
pub fn count_diagnostics(diagnostics: &[Diagnostic]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for diagnostic in diagnostics {
        *counts.entry(diagnostic.kind()).or_insert(0) += 1;
    }
    counts
}

/// Build the JSON document for a report.
pub fn report_to_json(
    sections: &[ClassSection],
    config: &ReportConfig,
    characters: &[Character],
    diagnostics: &[Diagnostic],
) -> Value {
    let sections: Vec<Value> = sections
        .iter()
        .map(|section| {
            let items: Vec<Value> = section
                .items
                .iter()
                .map(|item| {
                    json!({
                        "id": item.id,
                        "name": item.name,
                        "class": item.class,
                        "quantity": item.quantity,
                        "line": render_item_line(item, config),
                    })
                })
                .collect();

            json!({
                "heading": section.heading(),
                "class": section.class,
                "items": items,
            })
        })
        .collect();

    json!({
        "characters": characters,
        "sections": sections,
        "diagnostics": count_diagnostics(diagnostics),
    })
}

/// Export the report as pretty-printed JSON.
///
/// # Arguments
/// * `sections` - Report sections in display order
/// * `config` - Layout switches used for the rendered lines
/// * `characters` - Characters that were parsed
/// * `diagnostics` - Every diagnostic raised during the run
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(
    sections: &[ClassSection],
    config: &ReportConfig,
    characters: &[Character],
    diagnostics: &[Diagnostic],
    output_path: &Path,
) -> io::Result<()> {
    let report = report_to_json(sections, config, characters, diagnostics);

    let mut file = File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &report)?;
    writeln!(file)?;

    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
