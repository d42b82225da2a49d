//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, state machine trait, errors)
//! - `intake` - Policy gate, contact extraction and the dialogue engine

pub mod foundation;
pub mod intake;
