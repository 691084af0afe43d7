//! Sorting, class bucketing and text rendering of the final report.
//!
//! This is a pure pass over already-aggregated items; nothing here
//! touches the filesystem.

use super::types::{ClassSection, LineSuffix, ReportConfig};
use crate::types::{AggregatedItem, CharacterClass};
use std::cmp::Ordering;
use std::io::{self, Write};

const PART_PREFIX: &str = "Part of ";
const FADED_MARKER: &str = "Faded";

/// Sort items into report order.
///
/// Class ordinal then name, or name alone in name-only mode. Id and
/// quantity break ties so reruns print identical output.
pub fn sort_items(items: &mut [AggregatedItem], config: &ReportConfig) {
    items.sort_by(|a, b| {
        let by_class = if config.name_only_sort { Ordering::Equal } else { a.class.ordinal().cmp(&b.class.ordinal()) };
        by_class
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.quantity.cmp(&b.quantity))
    });
}

/// Sort and partition items into report sections.
pub fn build_sections(mut items: Vec<AggregatedItem>, config: &ReportConfig) -> Vec<ClassSection> {
    sort_items(&mut items, config);

    if !config.per_class_sections {
        return vec![ClassSection { class: None, items }];
    }

    CharacterClass::ALL
        .into_iter()
        .map(|class| ClassSection {
            class: Some(class),
            items: items.iter().filter(|item| item.class == class).cloned().collect(),
        })
        .filter(|section| config.include_empty_sections || !section.items.is_empty())
        .collect()
}

/// Pick the suffix for an item, first matching rule wins.
pub fn line_suffix(item: &AggregatedItem, config: &ReportConfig) -> LineSuffix {
    if item.name.starts_with(PART_PREFIX) {
        // Parity is a guess at which half of the pair this is
        if item.id % 2 == 0 { LineSuffix::Left } else { LineSuffix::Right }
    } else if item.name.contains(FADED_MARKER) {
        LineSuffix::ItemId(item.id)
    } else if config.show_class_tag {
        LineSuffix::ClassTag(item.class)
    } else {
        LineSuffix::None
    }
}

/// Render one item as `{quantity}x\t{name}{suffix}`.
pub fn render_item_line(item: &AggregatedItem, config: &ReportConfig) -> String {
    format!("{}x\t{}{}", item.quantity, item.name, line_suffix(item, config).render())
}

/// Write all sections to `out`.
pub fn render_report<W: Write>(out: &mut W, sections: &[ClassSection], config: &ReportConfig) -> io::Result<()> {
    for section in sections {
        writeln!(out)?;
        writeln!(out, "{}", section.heading())?;
        writeln!(out)?;
        for item in &section.items {
            writeln!(out, "{}", render_item_line(item, config))?;
        }
    }
    Ok(())
}

/// Render all sections into a string.
#[cfg(test)]
pub fn format_report(sections: &[ClassSection], config: &ReportConfig) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = render_report(&mut buf, sections, config);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report to stdout.
pub fn print_report(sections: &[ClassSection], config: &ReportConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&mut out, sections, config)?;
    out.flush()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
