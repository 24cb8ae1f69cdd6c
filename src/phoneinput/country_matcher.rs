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

use log::trace;

use super::{
    helper_constants::{MAX_LENGTH_FALLBACK_PREFIX, PARTIAL_MATCH_LENGTH, PLUS_SIGN},
    helper_functions::normalize_input,
    helper_types::InferredNumber,
};
use crate::{CountryCodeSource, CountryRecord, CountryTable, string_util::strip_cow_prefix};

/// Splits raw input into a country from the table and the local digits
/// that follow its dial code.
///
/// Some dial codes are prefixes of others (`+1` and `+1684`), so the
/// matcher always prefers the longest dial code that fits. Candidates
/// come from the table's length-sorted index.
#[derive(Debug, Clone, Copy)]
pub struct CountryMatcher<'a> {
    table: &'a CountryTable,
}

impl<'a> CountryMatcher<'a> {
    pub fn new(table: &'a CountryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CountryTable {
        self.table
    }

    /// Infers the country and local digits of `raw_input`.
    ///
    /// 1. A dial code that is a literal prefix of the input, longest first.
    ///    Equal lengths are resolved by table order.
    /// 2. Otherwise `"+"` followed by the first one, two, three or four
    ///    characters of the input, shortest first.
    /// 3. Otherwise no country, and the input without a leading `+` is
    ///    the local digits.
    pub fn infer_country_and_digits<'s>(&self, raw_input: &'s str) -> InferredNumber<'a, 's> {
        let normalized = normalize_input(raw_input);
        if normalized.is_empty() {
            return InferredNumber::empty();
        }

        if let Some(country) = self.longest_dial_code_prefix(&normalized) {
            trace!("Input {:?} starts with dial code {} of {}", raw_input, country.dial_code(), country.code());
            let digits = strip_cow_prefix(normalized, country.dial_code()).unwrap_or_else(|same| same);
            return InferredNumber::new(Some(country), digits, CountryCodeSource::DialCodePrefix);
        }

        for prefix_len in 1..=MAX_LENGTH_FALLBACK_PREFIX {
            let Some(prefix) = normalized.get(..prefix_len) else {
                break;
            };
            let candidate = fast_cat::concat_str!(PLUS_SIGN, prefix);
            if let Some(country) = self.table.find_by_dial_code(&candidate) {
                trace!("Input {:?} resolved to {} by its first {} characters", raw_input, country.code(), prefix_len);
                let digits = strip_cow_prefix(normalized, &candidate[PLUS_SIGN.len()..])
                    .unwrap_or_else(|same| same);
                return InferredNumber::new(Some(country), digits, CountryCodeSource::DigitsWithoutPlus);
            }
        }

        trace!("No dial code found in {:?}", raw_input);
        let digits = strip_cow_prefix(normalized, PLUS_SIGN).unwrap_or_else(|same| same);
        InferredNumber::new(None, digits, CountryCodeSource::Unmatched)
    }

    /// Guesses a country from digits typed without choosing one.
    ///
    /// Only fires when `"+" + digits` is exactly five characters long, so
    /// it runs once while the user types and never for longer input. The
    /// caller drops the `calling_code()` of the result from its digits.
    pub fn infer_from_partial_digits(&self, digits: &str) -> Option<&'a CountryRecord> {
        let digits = normalize_input(digits);
        if PLUS_SIGN.len() + digits.chars().count() != PARTIAL_MATCH_LENGTH {
            return None;
        }
        let candidate = fast_cat::concat_str!(PLUS_SIGN, &*digits);
        let country = self.longest_dial_code_prefix(&candidate);
        if let Some(country) = country {
            trace!("Partial input {:?} resolved to {}", digits, country.code());
        }
        country
    }

    fn longest_dial_code_prefix(&self, input: &str) -> Option<&'a CountryRecord> {
        self.table
            .by_dial_code_length()
            .find(|country| input.starts_with(country.dial_code()))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::CountryMatcher;
    use crate::{CountryCodeSource, CountryRecord, CountryTable};

    fn table() -> CountryTable {
        CountryTable::new(vec![
            CountryRecord::new("US", "United States", "+1").unwrap(),
            CountryRecord::new("UK", "United Kingdom", "+44").unwrap(),
            CountryRecord::new("UG", "Uganda", "+256").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn unchanged_input_is_not_copied() {
        let table = table();
        let matcher = CountryMatcher::new(&table);
        let inferred = matcher.infer_country_and_digits("+442079460000");
        assert!(matches!(inferred.digits, Cow::Borrowed("2079460000")));
        assert_eq!(inferred.country_code_source, CountryCodeSource::DialCodePrefix);
    }

    #[test]
    fn partial_digits_need_exact_length() {
        let table = table();
        let matcher = CountryMatcher::new(&table);
        assert_eq!(matcher.infer_from_partial_digits("441"), None);
        assert_eq!(matcher.infer_from_partial_digits("44123"), None);
        let uk = matcher.infer_from_partial_digits("4412").map(|c| c.code().as_str());
        assert_eq!(uk, Some("UK"));
    }
}
