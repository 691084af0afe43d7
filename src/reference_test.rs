/// Tests for reference data loading
#[cfg(test)]
mod tests {
    use crate::error::PipelineError;
    use crate::reference::*;
    use crate::types::CharacterClass;

    #[test]
    fn test_load_tab_delimited_catalog() {
        let data = b"id\tname\tclass\tquantity\n\
                     16076\tPart of Tasarin's Grimoire Pg. 312\tEnchanter\t12\n\
                     5000\tFaded Page\tWizard\t0\n";

        let catalog = load_catalog(data).expect("catalog should load");
        assert_eq!(catalog.len(), 2);

        let entry = &catalog[&16076];
        assert_eq!(entry.name, "Part of Tasarin's Grimoire Pg. 312");
        assert_eq!(entry.class, CharacterClass::Enchanter);
        assert_eq!(entry.quantity, 0, "quantity column must be reset");
        assert_eq!(catalog[&5000].class, CharacterClass::Wizard);
    }

    #[test]
    fn test_load_comma_delimited_catalog() {
        let data = b"id,name,class\n100,Spell: Root,Wizard\n101,Gnarled Page,necromancer\n";

        let catalog = load_catalog(data).expect("catalog should load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[&101].class, CharacterClass::Necromancer);
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let data = b"ID,Name,Class\n1,Pg,Magician\n";
        let catalog = load_catalog(data).expect("catalog should load");
        assert_eq!(catalog[&1].name, "Pg");
    }

    #[test]
    fn test_catalog_missing_class_column() {
        let data = b"id,name\n1,Pg\n";
        let err = load_catalog(data).unwrap_err();
        match err {
            PipelineError::MalformedReferenceData { dataset, reason } => {
                assert_eq!(dataset, "catalog");
                assert!(reason.contains("class"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_non_numeric_id() {
        let data = b"id,name,class\n1,Pg,Magician\nabc,Pg 2,Wizard\n";
        let err = load_catalog(data).unwrap_err();
        match err {
            PipelineError::MalformedReferenceData { reason, .. } => {
                assert!(reason.contains("row 2"), "reason: {}", reason);
                assert!(reason.contains("abc"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_unknown_class() {
        let data = b"id,name,class\n1,Pg,Bard\n";
        assert!(matches!(load_catalog(data), Err(PipelineError::MalformedReferenceData { .. })));
    }

    #[test]
    fn test_catalog_empty_input() {
        assert!(matches!(load_catalog(b""), Err(PipelineError::MalformedReferenceData { .. })));
    }

    #[test]
    fn test_duplicate_id_keeps_last_row() {
        let data = b"id,name,class\n1,First,Magician\n1,Second,Wizard\n";
        let catalog = load_catalog(data).expect("catalog should load");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[&1].name, "Second");
    }

    #[test]
    fn test_load_blacklist() {
        let data = b"id\tname\n13073\tBone Chips\n\n";
        let blacklist = load_blacklist(data).expect("blacklist should load");
        assert_eq!(blacklist.len(), 1);
        assert_eq!(blacklist[&13073].name, "Bone Chips");
    }

    #[test]
    fn test_blacklist_header_only() {
        let blacklist = load_blacklist(b"id,name\n").expect("blacklist should load");
        assert!(blacklist.is_empty());
    }

    #[test]
    fn test_blacklist_missing_id_column() {
        let err = load_blacklist(b"item,name\n1,x\n").unwrap_err();
        match err {
            PipelineError::MalformedReferenceData { dataset, reason } => {
                assert_eq!(dataset, "blacklist");
                assert!(reason.contains("'id'"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_reference_data_combines_both() {
        let refs = load_reference_data(b"id,name,class\n1,Pg,Magician\n", b"id,name\n2,Junk\n").unwrap();
        assert!(refs.lookup(1).is_some());
        assert!(refs.is_blacklisted(2));
    }
}
