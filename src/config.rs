/// Configuration resolution module
///
/// This module handles:
/// - Building a RunPlan from CLI arguments
/// - Parsing `name:Class` character tuples
/// - Mapping report flags onto a ReportConfig
use crate::cli::CliArgs;
use crate::pipeline::RunPlan;
use crate::report::ReportConfig;
use crate::types::{Character, CharacterClass, Diagnostic};
use log::{debug, warn};

/// Characters accepted from a `--characters` value, plus the rejected tuples
#[derive(Debug, Default, PartialEq)]
pub struct CharacterList {
    pub characters: Vec<Character>,
    pub rejected: Vec<Diagnostic>,
}

/// Build a complete RunPlan from CLI arguments
///
/// Invalid character tuples are logged and skipped rather than failing.
pub fn build_run_plan(args: &CliArgs) -> Result<RunPlan, String> {
    debug!("Building run plan from CLI args");

    let list = parse_character_list(&args.characters);
    for diagnostic in &list.rejected {
        diagnostic.emit();
    }

    if list.characters.is_empty() {
        warn!("No valid characters configured; the report will be empty");
    }

    debug!("Resolved {} characters", list.characters.len());

    Ok(RunPlan {
        directory: args.directory.clone(),
        catalog_path: args.catalog.clone(),
        blacklist_path: args.blacklist.clone(),
        characters: list.characters,
        report: report_config(args),
        json_output: args.json.clone(),
    })
}

/// Map report flags onto a ReportConfig
pub fn report_config(args: &CliArgs) -> ReportConfig {
    ReportConfig {
        per_class_sections: !args.combined,
        name_only_sort: args.sort_by_name,
        show_class_tag: args.class_tags,
        include_empty_sections: args.show_empty,
    }
}

/// Parse a comma-separated list of `name:Class` tuples
pub fn parse_character_list(spec: &str) -> CharacterList {
    let mut list = CharacterList::default();

    for tuple in spec.split(',') {
        match parse_character_tuple(tuple) {
            Some(character) => list.characters.push(character),
            None => list.rejected.push(Diagnostic::InvalidConfigTuple { tuple: tuple.to_string() }),
        }
    }

    list
}

/// Parse a single `name:Class` tuple
///
/// Returns None unless there are exactly two non-empty parts and the class is known.
pub fn parse_character_tuple(tuple: &str) -> Option<Character> {
    let parts: Vec<&str> = tuple.trim().split(':').collect();
    let [stem, class] = parts.as_slice() else {
        return None;
    };

    let stem = stem.trim();
    if stem.is_empty() {
        return None;
    }

    let class: CharacterClass = class.parse().ok()?;
    Some(Character::new(stem, class))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
