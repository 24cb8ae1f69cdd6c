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

//! Seams between the widget and the application hosting it.

use std::borrow::Cow;

use crate::{ListenerId, errors::ValidationError};

/// Value accessor and validator protocol of a host form framework.
///
/// The framework decides when to call these; the widget never calls back
/// into the framework except through the registered callbacks.
pub trait FormControl {
    /// Pushes an external value into the control. Does not trigger the
    /// change callback.
    fn write_value(&mut self, value: &str);

    /// Called with the new value whenever the user changes it.
    fn register_on_change(&mut self, callback: Box<dyn FnMut(&str)>) -> ListenerId;

    /// Called when the control loses focus.
    fn register_on_touched(&mut self, callback: Box<dyn FnMut()>) -> ListenerId;

    fn set_disabled_state(&mut self, disabled: bool);

    fn validate(&self) -> Result<(), ValidationError>;
}

/// Makes country icon markup safe to insert into the page.
///
/// Icons come from the host's country table, so the host decides how much
/// it trusts them.
pub trait IconSanitizer {
    fn sanitize<'a>(&self, svg: &'a str) -> Cow<'a, str>;
}

/// Passes markup through untouched, for tables the host fully controls.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrustedIcons;

impl IconSanitizer for TrustedIcons {
    fn sanitize<'a>(&self, svg: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(svg)
    }
}
