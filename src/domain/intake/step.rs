//! Dialogue steps of an intake session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a session stands in the intake dialogue.
///
/// - `LimitedResponse`: safe replies only; set initially and whenever a
///   medical question comes in
/// - `CollectContact`: asking for the contact details still missing
/// - `Handoff`: everything captured, staff takes over
///
/// Any other value found on the wire or in storage decodes to
/// `Unrecognized` and receives the fallback reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    #[default]
    LimitedResponse,
    CollectContact,
    Handoff,
    #[serde(other)]
    Unrecognized,
}

impl Step {
    /// Returns true if user text is scanned for contact details in this step.
    pub fn collects_contact(&self) -> bool {
        matches!(self, Self::LimitedResponse | Self::CollectContact)
    }

    /// Returns true once the session is waiting for staff follow-up.
    pub fn is_handoff(&self) -> bool {
        matches!(self, Self::Handoff)
    }
}

impl StateMachine for Step {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Step::*;
        match self {
            // The policy gate may fire from anywhere, so LimitedResponse is
            // always reachable.
            LimitedResponse | CollectContact => vec![LimitedResponse, CollectContact, Handoff],
            Handoff => vec![LimitedResponse, Handoff],
            Unrecognized => vec![LimitedResponse, Unrecognized],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wire_format {
        use super::*;

        #[test]
        fn default_step_is_limited_response() {
            assert_eq!(Step::default(), Step::LimitedResponse);
        }

        #[test]
        fn serializes_to_screaming_snake_case() {
            let json = serde_json::to_string(&Step::CollectContact).unwrap();
            assert_eq!(json, "\"COLLECT_CONTACT\"");
        }

        #[test]
        fn deserializes_known_steps() {
            let step: Step = serde_json::from_str("\"HANDOFF\"").unwrap();
            assert_eq!(step, Step::Handoff);
            let step: Step = serde_json::from_str("\"LIMITED_RESPONSE\"").unwrap();
            assert_eq!(step, Step::LimitedResponse);
        }

        #[test]
        fn unknown_value_decodes_to_unrecognized() {
            let step: Step = serde_json::from_str("\"BOOK_APPOINTMENT\"").unwrap();
            assert_eq!(step, Step::Unrecognized);
        }

        #[test]
        fn lowercase_value_is_not_a_known_step() {
            let step: Step = serde_json::from_str("\"handoff\"").unwrap();
            assert_eq!(step, Step::Unrecognized);
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn only_early_steps_collect_contact() {
            assert!(Step::LimitedResponse.collects_contact());
            assert!(Step::CollectContact.collects_contact());
            assert!(!Step::Handoff.collects_contact());
            assert!(!Step::Unrecognized.collects_contact());
        }

        #[test]
        fn handoff_is_handoff() {
            assert!(Step::Handoff.is_handoff());
            assert!(!Step::CollectContact.is_handoff());
        }
    }

    mod state_machine_trait {
        use super::*;

        const ALL: [Step; 4] = [
            Step::LimitedResponse,
            Step::CollectContact,
            Step::Handoff,
            Step::Unrecognized,
        ];

        #[test]
        fn every_step_can_regress_to_limited_response() {
            for step in ALL {
                assert!(
                    step.can_transition_to(&Step::LimitedResponse),
                    "{:?} should fall back to LimitedResponse",
                    step
                );
            }
        }

        #[test]
        fn handoff_cannot_go_back_to_collecting() {
            assert!(Step::Handoff.transition_to(Step::CollectContact).is_err());
        }

        #[test]
        fn collect_contact_advances_to_handoff() {
            assert_eq!(
                Step::CollectContact.transition_to(Step::Handoff),
                Ok(Step::Handoff)
            );
        }
    }
}
