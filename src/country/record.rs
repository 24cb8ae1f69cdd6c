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

use std::{borrow::Borrow, fmt, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::{
    phoneinput::{
        errors::{CountryTableError, InvalidCountryCodeError},
        helper_constants::{MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN, VALID_DIAL_CODE},
    },
    regex_util::RegexFullMatch,
};

static DIAL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile-time constant.
    Regex::new(VALID_DIAL_CODE).expect("dial code pattern is valid")
});

/// Short upper case identifier of a country, e.g. `US`.
///
/// Codes are normalized to upper case on construction, and a
/// `HashMap<CountryCode, _>` can be queried with a plain `&str` of the
/// normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Result<Self, InvalidCountryCodeError> {
        let trimmed = code.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_LENGTH_COUNTRY_CODE
            && trimmed.bytes().all(|b| b.is_ascii_alphanumeric());
        if !valid {
            return Err(InvalidCountryCodeError(code.to_owned()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = InvalidCountryCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the country table.
///
/// Records are immutable; the widget only ever holds shared references
/// into the table that owns them. Every record, deserialized ones included,
/// carries a dial code of the form `+<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCountryRecord")]
pub struct CountryRecord {
    code: CountryCode,
    display_name: String,
    dial_code: String,
    icon: Option<String>,
}

/// Wire shape of a [`CountryRecord`] before its dial code is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCountryRecord {
    code: CountryCode,
    display_name: String,
    dial_code: String,
    #[serde(default)]
    icon: Option<String>,
}

impl TryFrom<RawCountryRecord> for CountryRecord {
    type Error = CountryTableError;

    fn try_from(raw: RawCountryRecord) -> Result<Self, Self::Error> {
        let record = Self {
            code: raw.code,
            display_name: raw.display_name,
            dial_code: raw.dial_code,
            icon: raw.icon,
        };
        record.check_dial_code()?;
        Ok(record)
    }
}

impl CountryRecord {
    pub fn new(
        code: &str,
        display_name: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Result<Self, CountryTableError> {
        let record = Self {
            code: CountryCode::new(code)?,
            display_name: display_name.into(),
            dial_code: dial_code.into(),
            icon: None,
        };
        record.check_dial_code()?;
        Ok(record)
    }

    /// Attaches SVG markup shown next to the country name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Dial code including the leading plus sign, e.g. `+44`.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Dial code digits without the plus sign, e.g. `44`.
    pub fn calling_code(&self) -> &str {
        self.dial_code.strip_prefix(PLUS_SIGN).unwrap_or(&self.dial_code)
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn check_dial_code(&self) -> Result<(), CountryTableError> {
        if DIAL_CODE_PATTERN.full_match(&self.dial_code) {
            Ok(())
        } else {
            Err(CountryTableError::InvalidDialCode {
                code: self.code.clone(),
                dial_code: self.dial_code.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryCode, CountryRecord};
    use crate::errors::CountryTableError;

    #[test]
    fn country_code_is_normalized() {
        assert_eq!(CountryCode::new(" us ").unwrap().as_str(), "US");
        assert_eq!(CountryCode::new("gb").unwrap(), CountryCode::new("GB").unwrap());
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("U-S").is_err());
        assert!(CountryCode::new("TOOLONGCODE").is_err());
    }

    #[test]
    fn record_rejects_malformed_dial_codes() {
        assert!(CountryRecord::new("US", "United States", "+1").is_ok());
        assert!(CountryRecord::new("AS", "American Samoa", "+1684").is_ok());
        for bad in ["1", "+", "+1 684", "+1-684", "", "++1"] {
            let err = CountryRecord::new("XX", "Nowhere", bad).unwrap_err();
            assert!(
                matches!(err, CountryTableError::InvalidDialCode { ref dial_code, .. } if dial_code == bad),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn calling_code_drops_plus_sign() {
        let record = CountryRecord::new("UG", "Uganda", "+256").unwrap();
        assert_eq!(record.calling_code(), "256");
        assert_eq!(record.dial_code(), "+256");
        assert_eq!(record.icon(), None);
        assert_eq!(record.with_icon("<svg/>").icon(), Some("<svg/>"));
    }

    #[test]
    fn deserialized_records_are_checked() {
        let record: CountryRecord =
            serde_json::from_str(r#"{ "code": "ug", "displayName": "Uganda", "dialCode": "+256" }"#).unwrap();
        assert_eq!(record.code().as_str(), "UG");
        assert_eq!(record.calling_code(), "256");

        for bad in ["", "\u{FF0B}44", "44", "+4 4"] {
            let json = format!(r#"{{ "code": "XX", "displayName": "Nowhere", "dialCode": "{bad}" }}"#);
            let err = serde_json::from_str::<CountryRecord>(&json).unwrap_err();
            assert!(err.to_string().contains("Invalid dial code"), "{bad:?}: {err}");
        }
    }
}
