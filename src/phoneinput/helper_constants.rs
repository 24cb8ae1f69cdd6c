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

pub const PLUS_SIGN: &'static str = "+";
// ASCII plus and its full-width variant. Either may lead user input.
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

/// Dial codes are a plus sign followed by the country calling code digits.
/// Some tables spell NANP territories out in full (`+1684`), so no upper
/// bound is put on the digit count here.
pub const VALID_DIAL_CODE: &'static str = r"^\+[0-9]+$";

/// Country identifiers are short ASCII alphanumeric codes such as `US`.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 8;

/// Longest digit prefix tried when the input carries no plus sign.
pub const MAX_LENGTH_FALLBACK_PREFIX: usize = 4;

/// Length of `"+" + digits` at which a country is guessed from a number
/// typed without picking one.
pub const PARTIAL_MATCH_LENGTH: usize = 5;
