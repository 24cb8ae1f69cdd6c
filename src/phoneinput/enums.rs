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

use serde::Deserialize;
use strum::EnumIter;

/// Describes how the country of an inferred number was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// **Literal dial code prefix.**
    /// The input started with a dial code from the table, plus sign included.
    /// The longest such dial code wins, so `+1684...` resolves to American
    /// Samoa rather than the `+1` region.
    DialCodePrefix,
    /// **Leading digits without a plus sign.**
    /// Nothing in the table was a literal prefix, but `"+"` followed by the
    /// first one to four characters of the input equals a dial code. Shorter
    /// prefixes are tried first.
    DigitsWithoutPlus,
    /// **No country.**
    /// The whole input, minus a leading plus sign, is taken as local digits.
    Unmatched,
}

/// Decides when [`PhoneInput::validate`](crate::PhoneInput::validate)
/// reports a missing value.
#[derive(Debug, Default, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationPolicy {
    /// **Digits only.**
    /// The value is required as long as no local digits were entered.
    /// A number without a selected country is accepted.
    #[default]
    DigitsOnly,
    /// **Digits and country.**
    /// A selected country is required as well.
    DigitsAndCountry,
}

impl ValidationPolicy {
    pub fn requires_country(self) -> bool {
        matches!(self, ValidationPolicy::DigitsAndCountry)
    }
}
