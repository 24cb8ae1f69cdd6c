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

use std::{borrow::Cow, collections::HashSet};

use log::{debug, trace, warn};

use super::{
    config::PhoneInputConfig,
    country_matcher::CountryMatcher,
    enums::ValidationPolicy,
    errors::ValidationError,
    events::{ListenerId, Listeners, PhoneInputEvent, PhoneInputListener},
    helper_functions::{full_phone_number, normalize_input},
};
use crate::{
    CountryCode, CountryRecord, CountryTable,
    interfaces::{FormControl, IconSanitizer, TrustedIcons},
    string_util::contains_ignore_case,
};

/// State behind a phone number field with a country picker.
///
/// The widget keeps the selected country and the local digits; the value
/// the host sees, [`full_phone_number`](Self::full_phone_number), is always
/// derived from those two and pushed to listeners on every user-driven
/// change. External values written through [`set_value`](Self::set_value)
/// go back through the [`CountryMatcher`] so both sides never drift apart.
///
/// All entry points are synchronous and expect to be serialized by the
/// host's event loop.
pub struct PhoneInput<'a> {
    matcher: CountryMatcher<'a>,

    /// The full table, or the preferred part of it.
    active_countries: Vec<&'a CountryRecord>,

    /// Active countries passing the current search filter.
    displayed_countries: Vec<&'a CountryRecord>,

    selected_country: Option<&'a CountryRecord>,
    local_digits: String,
    search_filter: String,

    is_open: bool,
    is_focused: bool,
    is_disabled: bool,
    error_flag: bool,

    validation: ValidationPolicy,
    icon_sanitizer: Box<dyn IconSanitizer>,
    listeners: Listeners,
}

impl<'a> PhoneInput<'a> {
    pub fn new(table: &'a CountryTable) -> Self {
        let active_countries: Vec<_> = table.iter().collect();
        Self {
            matcher: CountryMatcher::new(table),
            displayed_countries: active_countries.clone(),
            active_countries,
            selected_country: None,
            local_digits: String::new(),
            search_filter: String::new(),
            is_open: false,
            is_focused: false,
            is_disabled: false,
            error_flag: false,
            validation: ValidationPolicy::default(),
            icon_sanitizer: Box::new(TrustedIcons),
            listeners: Listeners::default(),
        }
    }

    /// Creates the widget and applies `config`: preferred countries first,
    /// then the default country.
    pub fn with_config(table: &'a CountryTable, config: &PhoneInputConfig) -> Self {
        let mut input = Self::new(table);
        debug!("Applying phone input config {:?}", config);
        input.set_preferred_countries(&config.preferred_countries);
        if let Some(code) = &config.default_country {
            input.set_default_country(code);
        }
        input.error_flag = config.error_flag;
        input.validation = config.validation;
        input
    }

    pub fn with_icon_sanitizer(mut self, sanitizer: impl IconSanitizer + 'static) -> Self {
        self.icon_sanitizer = Box::new(sanitizer);
        self
    }

    pub fn table(&self) -> &'a CountryTable {
        self.matcher.table()
    }

    // Host -> widget

    /// Decomposes an externally supplied full number into country and
    /// local digits. Listeners are not notified, the host already knows
    /// the value it wrote.
    pub fn set_value(&mut self, value: &str) {
        let inferred = self.matcher.infer_country_and_digits(value);
        trace!(
            "External value {:?} split into {:?} + {:?} ({:?})",
            value,
            inferred.country.map(|c| c.code()),
            inferred.digits,
            inferred.country_code_source
        );
        self.selected_country = inferred.country;
        self.local_digits = inferred.digits.into_owned();
    }

    // User -> widget

    /// Takes the current text of the digits field after a keystroke.
    ///
    /// The new full number is emitted right away. If no country is picked
    /// yet, the digits are then checked for a dial code typed without a
    /// plus sign; when one is found it becomes the selected country, its
    /// digits are dropped from the field and the corrected value is
    /// emitted again.
    pub fn on_user_edit(&mut self, text: &str) {
        if self.is_disabled {
            trace!("Ignoring edit of disabled phone input");
            return;
        }
        self.local_digits = normalize_input(text).into_owned();
        self.emit_change();

        if self.selected_country.is_some() {
            return;
        }
        if let Some(country) = self.matcher.infer_from_partial_digits(&self.local_digits) {
            if let Some(rest) = self.local_digits.strip_prefix(country.calling_code()) {
                self.local_digits = rest.to_owned();
            }
            self.selected_country = Some(country);
            self.emit_change();
        }
    }

    /// Picks `country`, emits the new full number and closes the picker.
    ///
    /// The selection always points into the widget's table: `country` is
    /// looked up there by code, and a record the table does not know
    /// changes nothing.
    pub fn select_country(&mut self, country: &CountryRecord) {
        if self.is_disabled {
            trace!("Ignoring country pick on disabled phone input");
            return;
        }
        let Some(country) = self.table().get(country.code().as_str()) else {
            warn!("Cannot select country {} missing from the table", country.code());
            return;
        };
        trace!("Selected country {}", country.code());
        self.selected_country = Some(country);
        self.emit_change();
        self.close_picker();
    }

    /// Same as [`select_country`](Self::select_country) for a code from the
    /// table. Unknown codes change nothing and give `None`.
    pub fn select_country_by_code(&mut self, code: &str) -> Option<&'a CountryRecord> {
        let Some(country) = self.table().get(code) else {
            warn!("Cannot select unknown country code {:?}", code);
            return None;
        };
        self.select_country(country);
        Some(country)
    }

    /// Clears the selected country, emitting the digits alone.
    pub fn clear_country(&mut self) {
        if self.is_disabled || self.selected_country.is_none() {
            return;
        }
        self.selected_country = None;
        self.emit_change();
    }

    // Configuration

    /// Narrows the picker to `codes`, kept in table order. An empty list,
    /// or one naming no country of the table, restores the full table.
    pub fn set_preferred_countries<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = self.table();
        let mut wanted = HashSet::new();
        for code in codes {
            let code = code.as_ref();
            match CountryCode::new(code) {
                Ok(code) if table.contains(code.as_str()) => {
                    wanted.insert(code);
                }
                _ => warn!("Ignoring unknown preferred country {:?}", code),
            }
        }

        let preferred: Vec<_> = table
            .iter()
            .filter(|country| wanted.contains(country.code()))
            .collect();
        self.active_countries = if preferred.is_empty() {
            debug!("No preferred countries, offering all {}", table.len());
            table.iter().collect()
        } else {
            debug!("Offering {} preferred countries", preferred.len());
            preferred
        };
        self.apply_search_filter();
    }

    /// Selects the country for `code`. An unknown code keeps the current
    /// selection.
    pub fn set_default_country(&mut self, code: &str) {
        match self.table().get(code) {
            Some(country) => {
                debug!("Default country {}", country.code());
                self.selected_country = Some(country);
            }
            None => warn!("Unknown default country {:?}, keeping current selection", code),
        }
    }

    pub fn set_validation_policy(&mut self, validation: ValidationPolicy) {
        self.validation = validation;
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        self.validation
    }

    pub fn set_error_flag(&mut self, error_flag: bool) {
        self.error_flag = error_flag;
    }

    pub fn error_flag(&self) -> bool {
        self.error_flag
    }

    // Country picker

    /// Keeps the active countries whose name or dial code contains `term`,
    /// ignoring case, and returns them. The active list itself is not
    /// touched, so an empty term shows it whole again.
    pub fn filter_countries(&mut self, term: &str) -> &[&'a CountryRecord] {
        self.search_filter.clear();
        self.search_filter.push_str(term);
        self.apply_search_filter();
        &self.displayed_countries
    }

    /// Opens the picker with an empty search. Does nothing while disabled.
    pub fn open_picker(&mut self) {
        if self.is_disabled {
            return;
        }
        self.is_open = true;
        if !self.search_filter.is_empty() {
            self.search_filter.clear();
            self.apply_search_filter();
        }
    }

    pub fn close_picker(&mut self) {
        self.is_open = false;
    }

    pub fn toggle_picker(&mut self) {
        if self.is_open {
            self.close_picker();
        } else {
            self.open_picker();
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    // Focus and availability

    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Leaves the field and reports it as touched.
    pub fn blur(&mut self) {
        self.is_focused = false;
        self.listeners.emit(&PhoneInputEvent::Touched);
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Disabling also closes the picker.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
        if disabled {
            self.close_picker();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    // Validation

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.local_digits.is_empty() {
            return Err(ValidationError::Required);
        }
        if self.validation.requires_country() && self.selected_country.is_none() {
            return Err(ValidationError::Required);
        }
        Ok(())
    }

    // Listeners

    pub fn register_listener(&mut self, listener: impl PhoneInputListener + 'static) -> ListenerId {
        self.listeners.register(Box::new(listener))
    }

    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // Read access

    /// Dial code of the selected country followed by the local digits.
    pub fn full_phone_number(&self) -> String {
        full_phone_number(self.selected_country, &self.local_digits)
    }

    pub fn selected_country(&self) -> Option<&'a CountryRecord> {
        self.selected_country
    }

    pub fn local_digits(&self) -> &str {
        &self.local_digits
    }

    pub fn search_filter(&self) -> &str {
        &self.search_filter
    }

    pub fn active_countries(&self) -> &[&'a CountryRecord] {
        &self.active_countries
    }

    pub fn displayed_countries(&self) -> &[&'a CountryRecord] {
        &self.displayed_countries
    }

    /// Icon markup of `country` after it went through the sanitizer.
    pub fn icon_markup(&self, country: &'a CountryRecord) -> Option<Cow<'a, str>> {
        country.icon().map(|svg| self.icon_sanitizer.sanitize(svg))
    }

    fn emit_change(&mut self) {
        let value = self.full_phone_number();
        self.listeners.emit(&PhoneInputEvent::Changed(value));
    }

    fn apply_search_filter(&mut self) {
        let needle = self.search_filter.to_lowercase();
        self.displayed_countries = self
            .active_countries
            .iter()
            .copied()
            .filter(|country| {
                contains_ignore_case(country.display_name(), &needle)
                    || contains_ignore_case(country.dial_code(), &needle)
            })
            .collect();
    }
}

impl FormControl for PhoneInput<'_> {
    fn write_value(&mut self, value: &str) {
        self.set_value(value);
    }

    fn register_on_change(&mut self, mut callback: Box<dyn FnMut(&str)>) -> ListenerId {
        self.register_listener(move |event: &PhoneInputEvent| {
            if let PhoneInputEvent::Changed(value) = event {
                callback(value.as_str());
            }
        })
    }

    fn register_on_touched(&mut self, mut callback: Box<dyn FnMut()>) -> ListenerId {
        self.register_listener(move |event: &PhoneInputEvent| {
            if let PhoneInputEvent::Touched = event {
                callback();
            }
        })
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.set_disabled(disabled);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        PhoneInput::validate(self)
    }
}
