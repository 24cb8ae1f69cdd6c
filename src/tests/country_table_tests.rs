use crate::{CountryRecord, CountryTable, errors::CountryTableError};

use super::{country_codes::CountryCodes, get_country_table, init_logging};

#[test]
fn get_ignores_case_and_rejects_unknown_codes() {
    let table = get_country_table();
    assert_eq!(table.get("uk").map(|c| c.display_name()), Some("United Kingdom"));
    assert_eq!(table.get(CountryCodes::de()).map(|c| c.dial_code()), Some("+49"));
    assert!(table.get(CountryCodes::zz()).is_none());
    assert!(table.get("not a code").is_none());
    assert!(table.contains(CountryCodes::as_()));
}

#[test]
fn keeps_insertion_order() {
    let table = get_country_table();
    let codes: Vec<_> = table.iter().map(|c| c.code().as_str()).collect();
    assert_eq!(codes, ["US", "AS", "RU", "KZ", "UK", "DE", "BR", "UG"]);
    assert_eq!(table.len(), 8);
    assert!(!table.is_empty());
}

#[test]
fn dial_code_index_is_longest_first_and_stable() {
    let table = get_country_table();
    let codes: Vec<_> = table.by_dial_code_length().map(|c| c.code().as_str()).collect();
    assert_eq!(codes, ["AS", "UG", "UK", "DE", "BR", "US", "RU", "KZ"]);
}

#[test]
fn find_by_dial_code_returns_first_in_table_order() {
    let table = get_country_table();
    assert_eq!(table.find_by_dial_code("+7").map(|c| c.code().as_str()), Some(CountryCodes::ru()));
    assert_eq!(table.find_by_dial_code("+1684").map(|c| c.code().as_str()), Some(CountryCodes::as_()));
    assert!(table.find_by_dial_code("+999").is_none());
    assert!(table.find_by_dial_code("44").is_none());
}

#[test]
fn duplicate_codes_are_rejected() {
    init_logging();
    let result = CountryTable::new(vec![
        CountryRecord::new("US", "United States", "+1").unwrap(),
        CountryRecord::new("us", "Duplicate", "+1").unwrap(),
    ]);
    assert!(matches!(result, Err(CountryTableError::DuplicateCountryCode(code)) if code.as_str() == "US"));
}

#[test]
fn loads_from_json() {
    init_logging();
    let table = CountryTable::from_json(
        r#"[
            { "code": "UK", "displayName": "United Kingdom", "dialCode": "+44", "icon": "<svg/>" },
            { "code": "ug", "displayName": "Uganda", "dialCode": "+256" }
        ]"#,
    )
    .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("UK").and_then(|c| c.icon()), Some("<svg/>"));
    assert_eq!(table.get("UG").map(|c| c.calling_code()), Some("256"));
}

#[test]
fn json_with_bad_entries_is_rejected() {
    init_logging();
    let bad_dial_code = CountryTable::from_json(
        r#"[{ "code": "UK", "displayName": "United Kingdom", "dialCode": "44" }]"#,
    );
    assert!(matches!(bad_dial_code, Err(CountryTableError::Json(ref err)) if err.to_string().contains("Invalid dial code")));

    let empty_dial_code = CountryTable::from_json(
        r#"[{ "code": "XX", "displayName": "Nowhere", "dialCode": "" }]"#,
    );
    assert!(matches!(empty_dial_code, Err(CountryTableError::Json(_))));

    let bad_code = CountryTable::from_json(
        r#"[{ "code": "U K", "displayName": "United Kingdom", "dialCode": "+44" }]"#,
    );
    assert!(matches!(bad_code, Err(CountryTableError::Json(_))));

    let not_a_list = CountryTable::from_json(r#"{ "code": "UK" }"#);
    assert!(matches!(not_a_list, Err(CountryTableError::Json(_))));
}
