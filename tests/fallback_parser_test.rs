//! Tests for the positional fallback parser used on headerless sheets

use calamine::Data;
use factors_importer::parser::row::parse_fallback_row;

mod common;
use common::{number, text};

#[test]
fn test_parses_unit_then_value_row() {
    let row = vec![
        text("Road transport"),
        text("HGV"),
        text("tonne-km"),
        number(0.112),
    ];

    let raw = parse_fallback_row(&row).expect("row should parse");
    assert_eq!(raw.activity, "Road transport - HGV");
    assert_eq!(raw.unit, "tonne-km");
    assert_eq!(raw.kg_co2e, 0.112);
    assert_eq!(raw.fuel, None);
}

#[test]
fn test_rows_with_fewer_than_four_cells_are_skipped() {
    let row = vec![text("Electricity"), text("kWh"), number(0.193)];
    assert_eq!(parse_fallback_row(&row), None);
}

#[test]
fn test_value_found_within_four_columns_of_unit() {
    let row = vec![
        text("Water supply"),
        text("cubic metres"),
        Data::Empty,
        text("see note"),
        number(0.149),
    ];

    let raw = parse_fallback_row(&row).expect("row should parse");
    assert_eq!(raw.unit, "cubic metres");
    assert_eq!(raw.kg_co2e, 0.149);
}

#[test]
fn test_value_beyond_four_columns_of_unit_is_missed() {
    let row = vec![
        text("Water supply"),
        text("cubic metres"),
        Data::Empty,
        Data::Empty,
        Data::Empty,
        Data::Empty,
        number(0.149),
    ];
    assert_eq!(parse_fallback_row(&row), None);
}

#[test]
fn test_row_without_unit_keyword_is_skipped() {
    let row = vec![
        text("Hotel stay"),
        text("per night"),
        number(13.9),
        Data::Empty,
    ];
    assert_eq!(parse_fallback_row(&row), None);
}

#[test]
fn test_row_without_activity_prefix_is_skipped() {
    // Unit in the first column leaves nothing to build an activity from
    let row = vec![text("kWh"), number(0.193), Data::Empty, Data::Empty];
    assert_eq!(parse_fallback_row(&row), None);
}

#[test]
fn test_zero_value_after_unit_is_not_accepted() {
    let row = vec![
        text("Road transport"),
        text("HGV"),
        text("tonne-km"),
        number(0.0),
    ];
    assert_eq!(parse_fallback_row(&row), None);
}

#[test]
fn test_unit_keyword_matches_as_substring() {
    let row = vec![
        text("Passenger flight"),
        text("Long haul"),
        text("passenger-km travelled"),
        number(0.195),
    ];

    let raw = parse_fallback_row(&row).expect("row should parse");
    assert_eq!(raw.unit, "passenger-km travelled");
    assert_eq!(raw.activity, "Passenger flight - Long haul");
}
