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

use std::borrow::Cow;

use crate::{CountryCodeSource, CountryRecord};

/// Result of splitting raw input into a country and its local digits.
///
/// `'a` borrows the country table, `'s` the input. Digits stay borrowed
/// unless normalization had to rewrite the input.
#[derive(Debug, Clone, PartialEq)]
pub struct InferredNumber<'a, 's> {
    pub country: Option<&'a CountryRecord>,
    pub digits: Cow<'s, str>,
    pub country_code_source: CountryCodeSource,
}

impl<'a, 's> InferredNumber<'a, 's> {
    pub fn new(
        country: Option<&'a CountryRecord>,
        digits: Cow<'s, str>,
        country_code_source: CountryCodeSource,
    ) -> Self {
        Self { country, digits, country_code_source }
    }

    pub fn empty() -> Self {
        Self::new(None, Cow::Borrowed(""), CountryCodeSource::Unmatched)
    }
}
