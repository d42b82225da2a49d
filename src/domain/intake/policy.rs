//! Medical question policy gate.
//!
//! Any message that looks like a medication or treatment question gets a
//! fixed disclaimer instead of dialogue progress. Matching is plain
//! substring search on the lower-cased text, so words that merely contain a
//! keyword ("ibuprofenish", "retake") are gated as well. Erring towards the
//! disclaimer is acceptable.

/// Keywords that mark a message as a medical or medication question.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "antibiotic",
    "antibiotics",
    "amoxicillin",
    "penicillin",
    "clindamycin",
    "medicine",
    "medication",
    "dose",
    "dosage",
    "take",
    "should i",
    "ibuprofen",
    "painkiller",
    "prescription",
];

/// Returns true if `text` contains any of [`MEDICAL_KEYWORDS`], ignoring case.
pub fn is_medical_question(text: &str) -> bool {
    let lowered = text.to_lowercase();
    MEDICAL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Classifies messages and renders the safety disclaimer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyGate;

impl PolicyGate {
    pub fn new() -> Self {
        Self
    }

    /// Returns true if the message must be answered with the disclaimer.
    pub fn is_medical_question(&self, text: &str) -> bool {
        is_medical_question(text)
    }

    /// The fixed reply for gated messages.
    ///
    /// Never diagnoses, prescribes or mentions a dosage. Points to urgent
    /// care for red-flag symptoms and asks for callback details.
    pub fn disclaimer(&self, practice_name: &str) -> String {
        format!(
            "Thanks for your question. I can't recommend specific medication (including antibiotics) \
             without a clinician evaluating your situation.\n\n\
             If you have severe swelling, fever, trouble swallowing/breathing, or rapidly worsening pain, \
             please seek urgent care immediately.\n\n\
             If not urgent: the safest next step is to speak with a dentist from {practice_name} for proper guidance. \
             Can I take your **name** and **phone number**, and the **best time** to call you back?"
        )
    }
}
