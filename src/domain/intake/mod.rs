//! Intake domain module.
//!
//! The callback intake dialogue: a keyword policy gate that answers
//! medication questions with a fixed disclaimer, a free-text extractor for
//! contact details, and the engine that moves a session through its steps.

mod engine;
mod extractor;
mod policy;
mod state;
mod step;

pub use engine::{DialogueEngine, TurnOutcome};
pub use extractor::{
    extract_best_time, extract_name, extract_phone, FieldExtractor, MAX_NAME_LENGTH,
    MIN_PHONE_DIGITS,
};
pub use policy::{is_medical_question, PolicyGate, MEDICAL_KEYWORDS};
pub use state::{CollectedFields, ContactField, SessionState};
pub use step::Step;
