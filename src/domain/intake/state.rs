//! Per-session intake state and the contact details collected so far.

use serde::{Deserialize, Serialize};

use super::step::Step;
use crate::domain::foundation::StateMachine;

/// One of the three contact details the dialogue exists to obtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    BestTime,
}

impl ContactField {
    /// Fixed order in which missing details are asked for.
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Phone, Self::BestTime];

    /// Wording used when asking the caller for this detail.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone number",
            Self::BestTime => "best time to call",
        }
    }
}

/// Contact details captured from the caller.
///
/// Fields fill at most once: the first value captured wins and later turns
/// cannot overwrite or clear it. An empty string counts as not captured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectedFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub best_time: Option<String>,
}

impl CollectedFields {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    pub fn best_time(&self) -> Option<&str> {
        non_empty(&self.best_time)
    }

    /// Returns the captured value for `field`, if any.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name(),
            ContactField::Phone => self.phone(),
            ContactField::BestTime => self.best_time(),
        }
    }

    /// Stores `value` unless the field already holds one.
    ///
    /// Returns true if the value was stored.
    pub fn fill(&mut self, field: ContactField, value: String) -> bool {
        if self.get(field).is_some() || value.is_empty() {
            return false;
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::BestTime => &mut self.best_time,
        };
        *slot = Some(value);
        true
    }

    /// Details still missing, in asking order.
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// True once name, phone and best time are all captured.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Everything remembered about one caller's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub step: Step,
    /// Reserved for procedure routing; carried through untouched.
    pub procedure: Option<String>,
    /// Reserved for intent routing; carried through untouched.
    pub intent: Option<String>,
    pub collected: CollectedFields,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to `target`. The engine only requests edges the step machine
    /// allows.
    pub(crate) fn advance(&mut self, target: Step) {
        let next = self.step.transition_to(target);
        debug_assert!(next.is_ok(), "{next:?}");
        self.step = next.unwrap_or(target);
    }
}
