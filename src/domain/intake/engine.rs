//! Dialogue engine.
//!
//! One call handles one caller message: the policy gate goes first, then the
//! current step decides whether contact details are collected or the caller
//! is reminded that the team already has their request.

use super::extractor::FieldExtractor;
use super::policy::PolicyGate;
use super::state::{CollectedFields, ContactField, SessionState};
use super::step::Step;

/// Reply text together with the state to persist for the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: String,
    pub state: SessionState,
}

/// Drives a session through the intake steps.
///
/// Pure and synchronous: no I/O, no shared state. Callers must make sure a
/// session's state is not processed by two turns at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueEngine {
    gate: PolicyGate,
    extractor: FieldExtractor,
}

impl DialogueEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the reply to `user_text` and the updated state.
    ///
    /// # Rules
    /// 1. A medical question resets the step to `LimitedResponse` and is
    ///    answered with the disclaimer, whatever the current step.
    /// 2. In `LimitedResponse` / `CollectContact` the message is scanned for
    ///    contact details; the session moves to `Handoff` once all three are
    ///    known and to `CollectContact` otherwise.
    /// 3. `Handoff` and unrecognized steps get a short holding reply and the
    ///    state is left as is.
    pub fn next_reply(
        &self,
        practice_name: &str,
        user_text: &str,
        mut state: SessionState,
    ) -> TurnOutcome {
        if self.gate.is_medical_question(user_text) {
            state.advance(Step::LimitedResponse);
            return TurnOutcome {
                reply: self.gate.disclaimer(practice_name),
                state,
            };
        }

        if state.step.collects_contact() {
            return self.collect_contact(practice_name, user_text, state);
        }

        TurnOutcome {
            reply: request_with_team_reply(practice_name),
            state,
        }
    }

    fn collect_contact(
        &self,
        practice_name: &str,
        user_text: &str,
        mut state: SessionState,
    ) -> TurnOutcome {
        self.extractor.extract(&mut state, user_text);

        if state.collected.is_complete() {
            state.advance(Step::Handoff);
            let reply = handoff_reply(practice_name, &state.collected);
            return TurnOutcome { reply, state };
        }

        state.advance(Step::CollectContact);
        TurnOutcome {
            reply: missing_details_reply(&state.collected.missing()),
            state,
        }
    }
}

fn missing_details_reply(missing: &[ContactField]) -> String {
    let ask = missing
        .iter()
        .map(ContactField::label)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Got it. To arrange a callback, I still need your {ask}. \
         You can reply in one message like: \"My name is ..., my phone is ..., best time is ...\"."
    )
}

fn handoff_reply(practice_name: &str, collected: &CollectedFields) -> String {
    format!(
        "Thanks, {name}. I've captured your details.\n\n\
         **Phone:** {phone}\n\
         **Best time:** {best_time}\n\n\
         Someone from {practice_name} will contact you. If your symptoms worsen (swelling, fever, \
         trouble swallowing/breathing), please seek urgent care.",
        name = collected.name().unwrap_or_default(),
        phone = collected.phone().unwrap_or_default(),
        best_time = collected.best_time().unwrap_or_default(),
    )
}

fn request_with_team_reply(practice_name: &str) -> String {
    format!(
        "Thanks, your request is with the team at {practice_name}. \
         If anything changes urgently, please seek immediate care."
    )
}
