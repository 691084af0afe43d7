/// Tests for JSON export
#[cfg(test)]
mod tests {
    use crate::report::export::*;
    use crate::report::render::build_sections;
    use crate::report::types::{ClassSection, ReportConfig};
    use crate::types::{AggregatedItem, Character, CharacterClass, Diagnostic};

    fn sections(config: &ReportConfig) -> Vec<ClassSection> {
        build_sections(
            vec![
                AggregatedItem { id: 5000, name: "Faded Page".to_string(), class: CharacterClass::Wizard, quantity: 2 },
                AggregatedItem {
                    id: 16076,
                    name: "Part of Tasarin's Grimoire Pg. 312".to_string(),
                    class: CharacterClass::Enchanter,
                    quantity: 6,
                },
            ],
            config,
        )
    }

    fn diagnostics() -> Vec<Diagnostic> {
        vec![
            Diagnostic::UnknownItem { character: "Bob".to_string(), id: 1 },
            Diagnostic::UnknownItem { character: "Bob".to_string(), id: 2 },
            Diagnostic::DuplicateStack { character: "Bob".to_string(), name: "Pg".to_string() },
        ]
    }

    #[test]
    fn test_count_diagnostics_by_kind() {
        let counts = count_diagnostics(&diagnostics());
        assert_eq!(counts.get("unknown_item"), Some(&2));
        assert_eq!(counts.get("duplicate_stack"), Some(&1));
        assert_eq!(counts.get("class_mismatch"), None);
    }

    #[test]
    fn test_report_to_json_shape() {
        let config = ReportConfig::default();
        let characters = vec![Character::new("Bob", CharacterClass::Wizard)];
        let value = report_to_json(&sections(&config), &config, &characters, &diagnostics());

        assert_eq!(value["characters"][0]["stem"], "Bob");
        assert_eq!(value["characters"][0]["class"], "Wizard");

        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["heading"], "==== Enchanter Pages ====");
        assert_eq!(sections[0]["items"][0]["id"], 16076);
        assert_eq!(sections[0]["items"][0]["line"], "6x\tPart of Tasarin's Grimoire Pg. 312 (Left)");
        assert_eq!(sections[1]["class"], "Wizard");
        assert_eq!(sections[1]["items"][0]["quantity"], 2);

        assert_eq!(value["diagnostics"]["unknown_item"], 2);
    }

    #[test]
    fn test_export_json_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let config = ReportConfig::default();

        export_json_report(&sections(&config), &config, &[], &[], &path).expect("export should succeed");

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["sections"][1]["items"][0]["line"], "2x\tFaded Page (5000)");
        assert!(value["diagnostics"].as_object().unwrap().is_empty());
    }
}
