// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::LazyLock};

use dec_from_char::DecimalExtended;
use regex::Regex;

use super::helper_constants::{PLUS_CHARS, PLUS_SIGN};
use crate::{CountryRecord, regex_util::RegexConsume};

static PLUS_CHARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = fast_cat::concat_str!("[", PLUS_CHARS, "]+");
    // Built from constant characters only.
    Regex::new(&pattern).expect("plus chars pattern is valid")
});

/// Brings raw input into the shape dial codes are written in.
///
/// Non-ASCII decimal digits (full-width, Arabic-Indic, ...) become ASCII
/// digits and a leading run of plus characters collapses into one `+`.
/// Everything else is left as typed. Input that needs no change is
/// returned borrowed.
pub(super) fn normalize_input(raw: &str) -> Cow<'_, str> {
    let mut normalized = if raw.chars().any(|c| !c.is_ascii_digit() && c.is_decimal_utf8()) {
        Cow::Owned(dec_from_char::normalize_decimals(raw).to_string())
    } else {
        Cow::Borrowed(raw)
    };

    let leading_plus_end = PLUS_CHARS_PATTERN
        .find_start(&normalized)
        .filter(|plus| plus.as_str() != PLUS_SIGN)
        .map(|plus| plus.end());
    if let Some(end) = leading_plus_end {
        normalized = Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &normalized[end..]));
    }
    normalized
}

/// The value exchanged with the host: dial code followed by local digits,
/// or the local digits alone when no country is selected.
pub(super) fn full_phone_number(country: Option<&CountryRecord>, local_digits: &str) -> String {
    match country {
        Some(country) => fast_cat::concat_str!(country.dial_code(), local_digits),
        None => local_digits.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{full_phone_number, normalize_input};
    use crate::CountryRecord;

    #[test]
    fn ascii_input_stays_borrowed() {
        assert!(matches!(normalize_input("+4412345"), Cow::Borrowed("+4412345")));
        assert!(matches!(normalize_input("5551234"), Cow::Borrowed("5551234")));
        assert!(matches!(normalize_input(""), Cow::Borrowed("")));
    }

    #[test]
    fn plus_variants_collapse() {
        assert_eq!(normalize_input("++44123"), "+44123");
        assert_eq!(normalize_input("\u{FF0B}44123"), "+44123");
        // Only a leading run is touched.
        assert_eq!(normalize_input("44+123"), "44+123");
    }

    #[test]
    fn wide_digits_become_ascii() {
        assert_eq!(normalize_input("+\u{FF14}\u{FF14}123"), "+44123");
    }

    #[test]
    fn full_number_prefixes_dial_code() {
        let uk = CountryRecord::new("UK", "United Kingdom", "+44").unwrap();
        assert_eq!(full_phone_number(Some(&uk), "2079460000"), "+442079460000");
        assert_eq!(full_phone_number(Some(&uk), ""), "+44");
        assert_eq!(full_phone_number(None, "2079460000"), "2079460000");
    }
}
