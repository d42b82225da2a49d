//! Dental Intake - chat widget intake service
//!
//! Answers medication questions with a fixed disclaimer and otherwise
//! collects a caller's name, phone number and best callback time so staff
//! can take over.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
