use crate::aggregate;
use crate::error::PipelineError;
use crate::inventory;
use crate::reference;
use crate::types::*;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything needed to produce one report, resolved up front from the CLI
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub directory: PathBuf,
    pub catalog_path: PathBuf,
    pub blacklist_path: PathBuf,
    pub characters: Vec<Character>,
    pub report: crate::report::ReportConfig,
    pub json_output: Option<PathBuf>,
}

/// Result of parsing every character against the reference data
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    /// Union of all characters' aggregated items, unordered
    pub items: Vec<AggregatedItem>,
    /// Diagnostics in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

/// Path of a character's inventory export
pub fn inventory_path(directory: &Path, stem: &str) -> PathBuf {
    directory.join(format!("{}-Inventory.txt", stem))
}

/// Run the whole pipeline described by `plan`
///
/// Any unreadable file or malformed reference dataset stops the run with no
/// partial outcome. Diagnostics are logged as they are raised.
pub fn run(plan: &RunPlan) -> Result<PipelineOutcome, PipelineError> {
    let catalog_bytes = read_file(&plan.catalog_path)?;
    let blacklist_bytes = read_file(&plan.blacklist_path)?;
    let refs = reference::load_reference_data(&catalog_bytes, &blacklist_bytes)?;

    let mut outcome = PipelineOutcome::default();

    for character in &plan.characters {
        let path = inventory_path(&plan.directory, &character.stem);
        debug!("Parsing {} ({}) from {}", character.stem, character.class, path.display());

        let bytes = read_file(&path)?;
        let text = String::from_utf8_lossy(&bytes);
        let (items, diagnostics) = process_character(&text, character, &refs);

        outcome.items.extend(items);
        outcome.diagnostics.extend(diagnostics);
    }

    info!("Found {} research items", outcome.items.len());

    Ok(outcome)
}

/// Parse and aggregate one character's export
///
/// Returns the character's items and the diagnostics raised by both stages,
/// parser first.
pub fn process_character(
    text: &str,
    character: &Character,
    refs: &ReferenceData,
) -> (Vec<AggregatedItem>, Vec<Diagnostic>) {
    let parsed = inventory::parse_inventory(text, character, refs);
    for diagnostic in &parsed.diagnostics {
        diagnostic.emit();
    }

    let aggregation = aggregate::aggregate(character, &parsed.records, &refs.catalog);
    for diagnostic in &aggregation.diagnostics {
        diagnostic.emit();
    }

    let mut diagnostics = parsed.diagnostics;
    diagnostics.extend(aggregation.diagnostics);
    (aggregation.items, diagnostics)
}

fn read_file(path: &Path) -> Result<Vec<u8>, PipelineError> {
    fs::read(path).map_err(|source| PipelineError::FatalIo { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
