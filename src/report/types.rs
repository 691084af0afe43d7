//! Report type definitions for the rendering model.

use crate::types::{AggregatedItem, CharacterClass};

/// How the final report is laid out.
///
/// The plain per-class report, the Left/Right report and the combined
/// single-list report are all combinations of these switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// One section per class; otherwise a single combined section
    pub per_class_sections: bool,
    /// Sort by name alone instead of class then name
    pub name_only_sort: bool,
    /// Append ` [Class]` to lines with no other suffix
    pub show_class_tag: bool,
    /// Print headers for classes with no items
    pub include_empty_sections: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { per_class_sections: true, name_only_sort: false, show_class_tag: false, include_empty_sections: false }
    }
}

/// One headed block of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSection {
    /// `None` for the combined section
    pub class: Option<CharacterClass>,
    /// Items in display order
    pub items: Vec<AggregatedItem>,
}

impl ClassSection {
    /// Header line text, e.g. `==== Wizard Pages ====`.
    pub fn heading(&self) -> String {
        match self.class {
            Some(class) => format!("==== {} Pages ====", class),
            None => "==== All Pages ====".to_string(),
        }
    }
}

/// Name-dependent suffix for a rendered item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSuffix {
    /// `Part of ...` with an even id
    Left,
    /// `Part of ...` with an odd id
    Right,
    /// Name contains `Faded`; shows the numeric id
    ItemId(i64),
    /// Class tag when enabled
    ClassTag(CharacterClass),
    None,
}

impl LineSuffix {
    pub fn render(&self) -> String {
        match self {
            LineSuffix::Left => " (Left)".to_string(),
            LineSuffix::Right => " (Right)".to_string(),
            LineSuffix::ItemId(id) => format!(" ({})", id),
            LineSuffix::ClassTag(class) => format!(" [{}]", class),
            LineSuffix::None => String::new(),
        }
    }
}
