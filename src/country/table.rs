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

use std::{cmp::Reverse, collections::HashMap};

use log::trace;

use super::record::{CountryCode, CountryRecord};
use crate::phoneinput::errors::CountryTableError;

#[derive(Debug)]
pub struct CountryTable {
    /// Records in the order they were supplied. This is the order the
    /// country picker shows them in.
    records: Vec<CountryRecord>,

    /// A mapping from a country code to the position of its record.
    code_to_index: HashMap<CountryCode, usize>,

    /// A mapping from a dial code to the first record carrying it. Several
    /// countries share a dial code (NANP regions all use `+1` in tables
    /// that don't spell the area code out), the earliest one wins.
    dial_code_to_index: HashMap<String, usize>,

    /// Record positions sorted by dial code length, longest first. Equal
    /// lengths keep table order. Built once here so matching never sorts.
    by_dial_code_length: Vec<usize>,
}

impl CountryTable {
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, CountryTableError> {
        let mut code_to_index = HashMap::with_capacity(records.len());
        let mut dial_code_to_index = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if code_to_index.insert(record.code().clone(), index).is_some() {
                return Err(CountryTableError::DuplicateCountryCode(record.code().clone()));
            }
            dial_code_to_index
                .entry(record.dial_code().to_owned())
                .or_insert(index);
        }

        let mut by_dial_code_length: Vec<usize> = (0..records.len()).collect();
        // `sort_by_key` is stable, ties stay in table order.
        by_dial_code_length.sort_by_key(|&index| Reverse(records[index].dial_code().len()));

        trace!(
            "Loaded country table with {} records and {} distinct dial codes",
            records.len(),
            dial_code_to_index.len()
        );

        Ok(Self { records, code_to_index, dial_code_to_index, by_dial_code_length })
    }

    /// Parses a JSON array of `{ "code", "displayName", "dialCode", "icon"? }`
    /// objects.
    pub fn from_json(json: &str) -> Result<Self, CountryTableError> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Looks a record up by code, ignoring case. Unknown or malformed codes
    /// give `None`.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        let code = CountryCode::new(code).ok()?;
        self.code_to_index
            .get(code.as_str())
            .map(|&index| &self.records[index])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// First record, in table order, whose dial code is exactly `dial_code`.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&CountryRecord> {
        self.dial_code_to_index
            .get(dial_code)
            .map(|&index| &self.records[index])
    }

    /// Records ordered by dial code length, longest first.
    pub fn by_dial_code_length(&self) -> impl Iterator<Item = &CountryRecord> + '_ {
        self.by_dial_code_length.iter().map(|&index| &self.records[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CountryTable {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
