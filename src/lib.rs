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

//! Headless model of an international phone number input.
//!
//! The crate owns everything behind the text field and the country picker:
//! inferring the dial code hidden in whatever the user typed, keeping the
//! selected country and the local digits in sync with the single
//! "full phone number" value, and speaking to a host form framework through
//! [`interfaces::FormControl`]. Rendering is left to the host.
//!
//! ```
//! use intl_phone_input::{CountryRecord, CountryTable, PhoneInput};
//!
//! let table = CountryTable::new(vec![
//!     CountryRecord::new("US", "United States", "+1").unwrap(),
//!     CountryRecord::new("UG", "Uganda", "+256").unwrap(),
//! ]).unwrap();
//!
//! let mut input = PhoneInput::new(&table);
//! input.set_value("+2565551234");
//! assert_eq!(input.selected_country().map(|c| c.code().as_str()), Some("UG"));
//! assert_eq!(input.local_digits(), "5551234");
//! ```

mod country;
mod phoneinput;
pub mod interfaces;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use country::{CountryCode, CountryRecord, CountryTable};
pub use phoneinput::{
    config::PhoneInputConfig,
    country_matcher::CountryMatcher,
    enums::{CountryCodeSource, ValidationPolicy},
    errors,
    events::{ListenerId, PhoneInputEvent, PhoneInputListener},
    helper_types::InferredNumber,
    phone_input::PhoneInput,
};
