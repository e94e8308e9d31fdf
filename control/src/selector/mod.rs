//! Persisted, hysteresis-protected index selectors.
//!
//! Both selectors keep their authoritative value in RAM, clamped to the
//! protocol range, and treat flash as a best-effort backup: edits mark
//! the shared commit scheduler dirty and reach the wear-leveled segment
//! only once the user has stopped interacting.

mod bank;
mod program;

pub use bank::BankSelector;
pub use program::ProgramSelector;
