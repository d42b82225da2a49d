//! Contact detail extraction from free text.
//!
//! Deliberately naive: fixed phrases and substring search, no language
//! understanding. Rules run in the order phone, best time, name and each one
//! only fills a field that is still empty.

use super::state::{ContactField, SessionState};

/// Minimum number of digits for a run of text to count as a phone number.
pub const MIN_PHONE_DIGITS: usize = 9;

/// Longest name kept, in characters.
pub const MAX_NAME_LENGTH: usize = 80;

const BEST_TIME_PHRASES: &[&str] = &[
    "morning",
    "afternoon",
    "evening",
    "today",
    "tomorrow",
    "anytime",
];

/// Checked in this order; the first one present is the only one used.
const NAME_PATTERNS: &[&str] = &["my name is ", "i am ", "i'm "];

/// A name candidate ends at the earliest of these.
const NAME_TERMINATORS: &[&str] = &[".", ",", ";", " and "];

/// Fills empty contact fields of a session from one message.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scans `text` and stores whatever contact details it finds in
    /// `state.collected`. Never touches the step.
    pub fn extract(&self, state: &mut SessionState, text: &str) {
        let collected = &mut state.collected;

        if let Some(phone) = extract_phone(text) {
            collected.fill(ContactField::Phone, phone);
        }
        if let Some(best_time) = extract_best_time(text) {
            collected.fill(ContactField::BestTime, best_time);
        }
        if collected.name().is_none() {
            if let Some(name) = extract_name(text) {
                collected.fill(ContactField::Name, name);
            }
        }
    }
}

/// Keeps only digits and `+` signs, in their original order.
///
/// Digits from any script count, so numbers typed on an Arabic-Indic or
/// fullwidth keyboard are kept as typed. Returns the result when it holds at
/// least [`MIN_PHONE_DIGITS`] digits. Everything numeric in the message is
/// pooled, so a message with a date and a short number can also qualify.
pub fn extract_phone(text: &str) -> Option<String> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_numeric() || *c == '+')
        .collect();
    let digits = kept.chars().filter(|c| c.is_numeric()).count();
    (digits >= MIN_PHONE_DIGITS).then_some(kept)
}

/// Returns the whole trimmed message when it mentions a callback time phrase.
pub fn extract_best_time(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();
    BEST_TIME_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
        .then(|| trimmed.to_string())
}

/// Pulls a self-declared name ("my name is X", "I am X", "I'm X").
///
/// Only the first pattern present is tried. The candidate is cut to
/// [`MAX_NAME_LENGTH`] characters and must be at least two characters long
/// at that point, counting any space before the terminator. The stored name
/// is trimmed.
pub fn extract_name(text: &str) -> Option<String> {
    let text = text.trim();
    let (start, pattern) = NAME_PATTERNS
        .iter()
        .find_map(|pattern| find_ignore_ascii_case(text, pattern).map(|at| (at, *pattern)))?;

    let rest = text[start + pattern.len()..].trim();
    let end = NAME_TERMINATORS
        .iter()
        .filter_map(|terminator| rest.find(terminator))
        .min()
        .unwrap_or(rest.len());
    let candidate: String = rest[..end].chars().take(MAX_NAME_LENGTH).collect();

    if candidate.chars().count() < 2 {
        return None;
    }
    let name = candidate.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Byte offset of the first ASCII case-insensitive match of `needle`.
///
/// `needle` must be ASCII; a match then always starts and ends on char
/// boundaries of `haystack`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Step;

    mod phone {
        use super::*;

        #[test]
        fn keeps_digits_and_plus_in_order() {
            assert_eq!(
                extract_phone("my phone is +1 555 123 4567"),
                Some("+15551234567".to_string())
            );
        }

        #[test]
        fn nine_digits_is_enough() {
            assert_eq!(extract_phone("555000111"), Some("555000111".to_string()));
        }

        #[test]
        fn eight_digits_is_not() {
            assert_eq!(extract_phone("call 5550 0011"), None);
        }

        #[test]
        fn plus_signs_do_not_count_as_digits() {
            assert_eq!(extract_phone("++++12345678"), None);
        }

        #[test]
        fn scattered_digits_are_pooled() {
            assert_eq!(
                extract_phone("room 12, ext 345, code 6789"),
                Some("123456789".to_string())
            );
        }

        #[test]
        fn non_ascii_digits_are_kept() {
            assert_eq!(extract_phone("٥٥٥٠٠٠١١١"), Some("٥٥٥٠٠٠١١١".to_string()));
            assert_eq!(
                extract_phone("my number is ５５５０００１１１"),
                Some("５５５０００１１１".to_string())
            );
        }

        #[test]
        fn mixed_scripts_are_pooled() {
            assert_eq!(extract_phone("+1 ５５５ 000 ١١١"), Some("+1５５５000١١١".to_string()));
        }
    }

    mod best_time {
        use super::*;

        #[test]
        fn stores_trimmed_message_text() {
            assert_eq!(
                extract_best_time("  Tomorrow MORNING please  "),
                Some("Tomorrow MORNING please".to_string())
            );
        }

        #[test]
        fn every_phrase_is_recognized() {
            for phrase in BEST_TIME_PHRASES {
                assert!(extract_best_time(phrase).is_some(), "{phrase}");
            }
        }

        #[test]
        fn plain_text_yields_nothing() {
            assert_eq!(extract_best_time("call me at 5pm"), None);
        }
    }

    mod name {
        use super::*;

        #[test]
        fn my_name_is_pattern() {
            assert_eq!(
                extract_name("My name is Ana, my phone is +1 555 123 4567"),
                Some("Ana".to_string())
            );
        }

        #[test]
        fn i_am_pattern() {
            assert_eq!(extract_name("I am Maria Lopez."), Some("Maria Lopez".to_string()));
        }

        #[test]
        fn contraction_pattern() {
            assert_eq!(
                extract_name("I'm John, my number is 555000111"),
                Some("John".to_string())
            );
        }

        #[test]
        fn earliest_terminator_wins() {
            assert_eq!(
                extract_name("my name is Ana and Bob; call. me, later"),
                Some("Ana".to_string())
            );
            assert_eq!(extract_name("i am Li; really, yes"), Some("Li".to_string()));
        }

        #[test]
        fn first_listed_pattern_is_authoritative() {
            // "i am " appears earlier in the text, but "my name is " is
            // checked first.
            assert_eq!(
                extract_name("I am calling, my name is Zoe"),
                Some("Zoe".to_string())
            );
        }

        #[test]
        fn short_candidate_is_rejected() {
            assert_eq!(extract_name("I'm X"), None);
            assert_eq!(extract_name("my name is ."), None);
        }

        #[test]
        fn space_before_terminator_counts_toward_minimum() {
            assert_eq!(extract_name("I'm A ."), Some("A".to_string()));
            assert_eq!(extract_name("I'm A."), None);
        }

        #[test]
        fn trailing_space_is_trimmed_from_stored_name() {
            assert_eq!(extract_name("I'm John , call me"), Some("John".to_string()));
        }

        #[test]
        fn failed_first_pattern_does_not_try_the_next() {
            assert_eq!(extract_name("my name is , but I'm Ana"), None);
        }

        #[test]
        fn long_names_are_cut_to_limit() {
            let long = "x".repeat(200);
            let name = extract_name(&format!("my name is {long}")).unwrap();
            assert_eq!(name.chars().count(), MAX_NAME_LENGTH);
        }

        #[test]
        fn pattern_needs_trailing_space() {
            assert_eq!(extract_name("I'mJohn"), None);
        }

        #[test]
        fn non_ascii_names_are_preserved() {
            assert_eq!(extract_name("Me llamo... I'm José, hola"), Some("José".to_string()));
        }

        #[test]
        fn no_pattern_yields_nothing() {
            assert_eq!(extract_name("hello there"), None);
        }
    }

    mod field_extractor {
        use super::*;

        #[test]
        fn fills_all_fields_from_one_message() {
            let mut state = SessionState::new();
            let text = "My name is Ana, my phone is +1 555 123 4567, anytime is fine";
            FieldExtractor::new().extract(&mut state, text);

            assert_eq!(state.collected.name(), Some("Ana"));
            assert_eq!(state.collected.phone(), Some("+15551234567"));
            assert_eq!(state.collected.best_time(), Some(text));
        }

        #[test]
        fn does_not_touch_step() {
            let mut state = SessionState {
                step: Step::Handoff,
                ..Default::default()
            };
            FieldExtractor::new().extract(&mut state, "I'm John, 555000111, evening");
            assert_eq!(state.step, Step::Handoff);
        }

        #[test]
        fn captured_values_are_never_overwritten() {
            let mut state = SessionState::new();
            let extractor = FieldExtractor::new();
            extractor.extract(&mut state, "I'm John, 555000111, evening works");
            extractor.extract(&mut state, "My name is Bob, 999888777666, tomorrow morning");

            assert_eq!(state.collected.name(), Some("John"));
            assert_eq!(state.collected.phone(), Some("555000111"));
            assert_eq!(
                state.collected.best_time(),
                Some("I'm John, 555000111, evening works")
            );
        }

        #[test]
        fn later_turn_fills_remaining_field() {
            let mut state = SessionState::new();
            let extractor = FieldExtractor::new();
            extractor.extract(&mut state, "555000111");
            assert_eq!(state.collected.name(), None);

            extractor.extract(&mut state, "oh and I am Priya");
            assert_eq!(state.collected.name(), Some("Priya"));
        }
    }
}
