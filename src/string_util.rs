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

/// Strips prefix of given string Cow. Returns `Ok` with the rest if prefix
/// was found and stripped, `Err` with the untouched input otherwise.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Result<Cow<'a, str>, Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix)
            .map(Cow::Borrowed)
            .ok_or(Cow::Borrowed(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Ok(Cow::Owned(s));
            }
            Err(Cow::Owned(s))
        }
    }
}

/// Case-insensitive substring test. `needle_lowercase` must already be
/// lowercased so callers filtering many items lowercase it once.
pub fn contains_ignore_case(haystack: &str, needle_lowercase: &str) -> bool {
    if needle_lowercase.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_lowercase.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle_lowercase.len())
            .any(|window| window.eq_ignore_ascii_case(needle_lowercase.as_bytes()));
    }
    haystack.to_lowercase().contains(needle_lowercase)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{contains_ignore_case, strip_cow_prefix};

    #[test]
    fn test_usage() {
        let str_to_strip = Cow::Owned("+44:test".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "+44");
        assert_eq!(stripped, Ok(Cow::Owned(":test".to_owned())));

        let str_to_strip = Cow::Owned("test:+44".to_owned());
        let stripped = strip_cow_prefix(str_to_strip, "+44");
        assert_eq!(stripped, Err(Cow::Owned("test:+44".to_owned())));

        let stripped = strip_cow_prefix(Cow::Borrowed("+15551234"), "+1");
        assert!(matches!(stripped, Ok(Cow::Borrowed("5551234"))));
    }

    #[test]
    fn contains_ignore_case_matches_any_case() {
        assert!(contains_ignore_case("United Kingdom", "king"));
        assert!(contains_ignore_case("UGANDA", "ganda"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Uganda", "kingdom"));
        assert!(contains_ignore_case("Österreich", "österr"));
        assert!(!contains_ignore_case("+1", "+12"));
    }
}
