//! State machine trait for step enums.
//!
//! Gives every enum that models dialogue progress the same vocabulary for
//! checking and applying transitions.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors list the legal edges; checked transitions come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Step {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             LimitedResponse => vec![LimitedResponse, CollectContact, Handoff],
///             // ...
///         }
///     }
/// }
///
/// let next = step.transition_to(Step::Handoff)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is a legal edge.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable from self in one move.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the move, rejecting edges the machine does not define.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "step",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
