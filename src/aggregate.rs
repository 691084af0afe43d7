/// Per-character stack aggregation
///
/// Collapses a character's accepted slot records into one item per id with
/// the summed quantity. Every character gets its own map seeded from fresh
/// copies of catalog entries, so totals never carry over between characters.
use crate::types::{AggregatedItem, Catalog, Character, Diagnostic, SlotRecord};
use log::debug;
use std::collections::BTreeMap;

/// Spell pages legitimately spread across several slots
const SPELL_PREFIX: &str = "Spell: ";

#[derive(Debug, Default)]
pub struct Aggregation {
    /// One item per id, ascending by id
    pub items: Vec<AggregatedItem>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Sum a character's records by item id
///
/// Totals saturate at the `i64` bounds instead of overflowing.
pub fn aggregate(character: &Character, records: &[SlotRecord], catalog: &Catalog) -> Aggregation {
    let mut by_id: BTreeMap<i64, AggregatedItem> = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for record in records {
        if let Some(item) = by_id.get_mut(&record.id) {
            item.quantity = item.quantity.saturating_add(record.quantity);
            if !record.name.starts_with(SPELL_PREFIX) {
                diagnostics.push(Diagnostic::DuplicateStack {
                    character: character.stem.clone(),
                    name: record.name.clone(),
                });
            }
            continue;
        }

        let Some(entry) = catalog.get(&record.id) else {
            debug!("Record for id {} has no catalog entry, ignoring", record.id);
            continue;
        };

        let mut item = AggregatedItem::from_catalog(entry);
        item.quantity = item.quantity.saturating_add(record.quantity);
        by_id.insert(record.id, item);
    }

    debug!("{}: {} distinct research items from {} records", character.stem, by_id.len(), records.len());

    Aggregation { items: by_id.into_values().collect(), diagnostics }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
