/// Inventory export parsing
///
/// An export is one line per slot with five tab-separated fields:
///
/// ```text
/// General1-Slot1	Part of Tasarin's Grimoire Pg. 312	16076	6	5
/// ```
///
/// Only storage slots (`General*`, `Bank*`) holding catalogued,
/// non-blacklisted items become records.
use crate::types::{Character, Diagnostic, ReferenceData, SlotRecord};
use log::trace;

const FIELD_COUNT: usize = 5;
const EMPTY_SLOT: &str = "Empty";
const STORAGE_PREFIXES: [&str; 2] = ["General", "Bank"];

/// Records accepted from one export plus what went wrong along the way
#[derive(Debug, Default)]
pub struct ParsedInventory {
    pub records: Vec<SlotRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse an integer field, treating anything unparseable as 0
///
/// One bad field should not abort a whole export.
pub fn parse_int_or_zero(field: &str) -> i64 {
    field.trim().parse().unwrap_or(0)
}

/// Parse one character's export against the reference data
pub fn parse_inventory(text: &str, character: &Character, refs: &ReferenceData) -> ParsedInventory {
    let mut parsed = ParsedInventory::default();

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            continue;
        }

        let slot = fields[0];
        let name = fields[1];
        let id = parse_int_or_zero(fields[2]);
        let quantity = parse_int_or_zero(fields[3]);

        if !is_storage_slot(slot) {
            trace!("Skipping non-inventory slot: {}", slot);
            continue;
        }
        if name == EMPTY_SLOT {
            trace!("Skipping empty slot: {}", slot);
            continue;
        }
        if refs.is_blacklisted(id) {
            trace!("Skipping blacklisted item: {} ({})", name, id);
            continue;
        }

        let Some(entry) = refs.lookup(id) else {
            parsed.diagnostics.push(Diagnostic::UnknownItem { character: character.stem.clone(), id });
            continue;
        };

        if entry.class != character.class {
            parsed.diagnostics.push(Diagnostic::ClassMismatch {
                character: character.stem.clone(),
                name: name.to_string(),
                expected: character.class,
                actual: entry.class,
            });
        }

        parsed.records.push(SlotRecord { slot: slot.to_string(), name: name.to_string(), id, quantity });
    }

    parsed
}

fn is_storage_slot(slot: &str) -> bool {
    STORAGE_PREFIXES.iter().any(|prefix| slot.starts_with(prefix))
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;
