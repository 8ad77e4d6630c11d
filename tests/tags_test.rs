//! Tests for searchable tag generation

use factors_importer::model::generate_tags;

#[test]
fn test_tags_split_and_lowercase_the_record_text() {
    let tags = generate_tags("Fuels", "Natural gas", Some("Natural gas"), "kWh");
    assert_eq!(tags, vec!["fuels", "gas", "kwh", "natural"]);
}

#[test]
fn test_brackets_and_hyphens_become_separators() {
    let tags = generate_tags("Transport", "HGV (all diesel)", None, "tonne-km");
    assert!(tags.contains(&"hgv".to_string()));
    assert!(tags.contains(&"diesel".to_string()));
    assert!(tags.contains(&"all".to_string()));
    // The unit is kept whole
    assert!(tags.contains(&"tonne-km".to_string()));
}

#[test]
fn test_single_character_tokens_are_dropped() {
    let tags = generate_tags("Other", "Class A vans", None, "km");
    assert!(!tags.contains(&"a".to_string()));
    assert!(tags.contains(&"vans".to_string()));
    assert!(tags.contains(&"km".to_string()));
}

#[test]
fn test_tags_are_deduplicated_and_sorted() {
    let tags = generate_tags("Fuels", "Fuels fuels FUELS", None, "litre");
    assert_eq!(tags, vec!["fuels", "litre"]);

    let tags = generate_tags("Waste", "Landfill waste", None, "tonne");
    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted);
}
