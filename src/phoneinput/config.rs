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

use super::{enums::ValidationPolicy, errors::ConfigError};

/// Initialization-time settings of a [`PhoneInput`](crate::PhoneInput).
///
/// ```json
/// {
///   "defaultCountry": "UG",
///   "preferredCountries": ["UG", "UK"],
///   "errorFlag": false,
///   "validation": "digitsAndCountry"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneInputConfig {
    /// Country selected before the user picks one.
    pub default_country: Option<String>,
    /// Countries offered in the picker, shown in table order. Empty means
    /// the whole table.
    pub preferred_countries: Vec<String>,
    /// Display-only error marker forwarded to the renderer.
    pub error_flag: bool,
    pub validation: ValidationPolicy,
}

impl PhoneInputConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_default_country(mut self, code: impl Into<String>) -> Self {
        self.default_country = Some(code.into());
        self
    }

    pub fn with_preferred_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_countries = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error_flag(mut self, error_flag: bool) -> Self {
        self.error_flag = error_flag;
        self
    }

    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }
}
