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

use regex::{Match, Regex};

pub trait RegexFullMatch {
    /// Whole string must be covered by one match
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    /// Returns the first match only if it is anchored at the start of `s`.
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find(s)
            .is_some_and(|matched| matched.start() == 0 && matched.end() == s.len())
    }
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{RegexConsume, RegexFullMatch};

    #[test]
    fn full_match_needs_whole_input() {
        let digits = Regex::new("[0-9]+").unwrap();
        assert!(digits.full_match("12345"));
        assert!(!digits.full_match("123a"));
        assert!(!digits.full_match("a123"));
        assert!(!digits.full_match(""));
    }

    #[test]
    fn find_start_is_anchored() {
        let plus = Regex::new("[+\u{FF0B}]+").unwrap();
        assert_eq!(plus.find_start("++44").map(|m| m.as_str()), Some("++"));
        assert!(plus.find_start("\u{FF0B}44").is_some());
        assert!(plus.find_start("44+").is_none());
    }
}
