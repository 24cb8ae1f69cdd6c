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

use log::trace;

/// Notifications a [`PhoneInput`](crate::PhoneInput) sends outward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhoneInputEvent {
    /// The full phone number changed because of a user edit or a country
    /// pick. Carries the new value.
    Changed(String),
    /// The text field lost focus.
    Touched,
}

pub trait PhoneInputListener {
    fn on_event(&mut self, event: &PhoneInputEvent);
}

impl<F> PhoneInputListener for F
where
    F: FnMut(&PhoneInputEvent),
{
    fn on_event(&mut self, event: &PhoneInputEvent) {
        self(event)
    }
}

/// Handle returned on registration, used to unregister a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Listeners in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn PhoneInputListener>)>,
}

impl Listeners {
    pub fn register(&mut self, listener: Box<dyn PhoneInputListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        before != self.entries.len()
    }

    pub fn emit(&mut self, event: &PhoneInputEvent) {
        trace!("Emitting {:?} to {} listeners", event, self.entries.len());
        for (_, listener) in self.entries.iter_mut() {
            listener.on_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
