/// Core data structures for inventory parsing and reporting
///
/// This module defines the reference data, transient slot records,
/// aggregated items and diagnostics shared by every pipeline stage.
use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Character class that research items belong to.
///
/// The declaration order is the report order; `ordinal` makes it explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Enchanter,
    Magician,
    Necromancer,
    Wizard,
}

impl CharacterClass {
    /// All classes in display order
    pub const ALL: [CharacterClass; 4] =
        [CharacterClass::Enchanter, CharacterClass::Magician, CharacterClass::Necromancer, CharacterClass::Wizard];

    /// Position of this class in sort and bucket order
    pub fn ordinal(&self) -> u8 {
        match self {
            CharacterClass::Enchanter => 0,
            CharacterClass::Magician => 1,
            CharacterClass::Necromancer => 2,
            CharacterClass::Wizard => 3,
        }
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Enchanter => "Enchanter",
            CharacterClass::Magician => "Magician",
            CharacterClass::Necromancer => "Necromancer",
            CharacterClass::Wizard => "Wizard",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown class '{}'", trimmed))
    }
}

/// A character whose inventory export is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// File stem of the export, `{stem}-Inventory.txt`
    pub stem: String,
    pub class: CharacterClass,
}

impl Character {
    pub fn new(stem: impl Into<String>, class: CharacterClass) -> Self {
        Self { stem: stem.into(), class }
    }
}

/// A catalogued research item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub class: CharacterClass,
    /// Baseline for per-character accumulation, always 0 after load
    pub quantity: i64,
}

/// An item excluded from research reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlacklistEntry {
    pub id: i64,
    pub name: String,
}

pub type Catalog = HashMap<i64, CatalogEntry>;
pub type Blacklist = HashMap<i64, BlacklistEntry>;

/// Both reference datasets, passed by reference into the parser and aggregator
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub catalog: Catalog,
    pub blacklist: Blacklist,
}

impl ReferenceData {
    pub fn is_blacklisted(&self, id: i64) -> bool {
        self.blacklist.contains_key(&id)
    }

    pub fn lookup(&self, id: i64) -> Option<&CatalogEntry> {
        self.catalog.get(&id)
    }
}

/// One accepted line of an inventory export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    pub slot: String,
    pub name: String,
    pub id: i64,
    pub quantity: i64,
}

/// Summed quantity of one item for one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedItem {
    pub id: i64,
    pub name: String,
    pub class: CharacterClass,
    pub quantity: i64,
}

impl AggregatedItem {
    /// Start a new aggregate from a private copy of the catalog entry
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        Self { id: entry.id, name: entry.name.clone(), class: entry.class, quantity: entry.quantity }
    }
}

/// Recoverable per-record anomaly. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Inventory line references an id missing from the catalog; line dropped
    UnknownItem { character: String, id: i64 },
    /// Catalog class differs from the character's class; record kept
    ClassMismatch { character: String, name: String, expected: CharacterClass, actual: CharacterClass },
    /// Same non-spell item found in more than one slot; quantities summed
    DuplicateStack { character: String, name: String },
    /// Malformed `stem:Class` entry in the character list; entry skipped
    InvalidConfigTuple { tuple: String },
}

impl Diagnostic {
    /// Stable short name, used for export counts
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::UnknownItem { .. } => "unknown_item",
            Diagnostic::ClassMismatch { .. } => "class_mismatch",
            Diagnostic::DuplicateStack { .. } => "duplicate_stack",
            Diagnostic::InvalidConfigTuple { .. } => "invalid_config_tuple",
        }
    }

    /// Write this diagnostic to the log at its level
    pub fn emit(&self) {
        match self {
            Diagnostic::UnknownItem { .. } => error!("{}", self),
            _ => warn!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownItem { character, id } => {
                write!(f, "No item in database for ID: {} (character: {})", id, character)
            }
            Diagnostic::ClassMismatch { character, name, expected, actual } => {
                write!(f, "{} ({}) has wrong class research item: {} [{}]", character, expected, name, actual)
            }
            Diagnostic::DuplicateStack { character, name } => {
                write!(f, "Duplicate stack of item: {} on character: {}", name, character)
            }
            Diagnostic::InvalidConfigTuple { tuple } => {
                write!(f, "Invalid character name and class tuple: {}", tuple)
            }
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
