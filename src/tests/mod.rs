mod country_table_tests;

use crate::{CountryRecord, CountryTable};

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

fn record(code: &str, name: &str, dial_code: &str) -> CountryRecord {
    CountryRecord::new(code, name, dial_code).expect("fixture record should be valid")
}

/// US, UK and UG only.
pub(crate) fn get_small_table() -> CountryTable {
    init_logging();
    CountryTable::new(vec![
        record("US", "United States", "+1"),
        record("UK", "United Kingdom", "+44"),
        record("UG", "Uganda", "+256"),
    ])
    .expect("fixture table should be valid")
}

/// A table with overlapping dial codes: `+1` and `+1684`, and `+7`
/// shared by RU and KZ (RU listed first).
pub(crate) fn get_country_table() -> CountryTable {
    init_logging();
    CountryTable::new(vec![
        record("US", "United States", "+1"),
        record("AS", "American Samoa", "+1684").with_icon("<svg id=\"as\"/>"),
        record("RU", "Russia", "+7"),
        record("KZ", "Kazakhstan", "+7"),
        record("UK", "United Kingdom", "+44"),
        record("DE", "Germany", "+49").with_icon("<svg id=\"de\"/>"),
        record("BR", "Brazil", "+55"),
        record("UG", "Uganda", "+256"),
    ])
    .expect("fixture table should be valid")
}
