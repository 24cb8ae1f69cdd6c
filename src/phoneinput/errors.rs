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

use thiserror::Error;

use crate::CountryCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid country code: {0:?}")]
pub struct InvalidCountryCodeError(pub String);

#[derive(Debug, Error)]
pub enum CountryTableError {
    #[error("{0}")]
    InvalidCountryCode(#[from] InvalidCountryCodeError),

    #[error("Invalid dial code {dial_code:?} for country {code}")]
    InvalidDialCode {
        code: CountryCode,
        dial_code: String,
    },

    #[error("Country {0} is listed more than once")]
    DuplicateCountryCode(CountryCode),

    #[error("Failed to parse country table: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse phone input config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of validating the widget for the host form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// No local digits were entered, or, under
    /// [`ValidationPolicy::DigitsAndCountry`](crate::ValidationPolicy::DigitsAndCountry),
    /// no country is selected.
    #[error("A phone number is required")]
    Required,
}
