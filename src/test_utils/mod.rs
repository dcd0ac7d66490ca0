//! Shared test fixtures and assertions
//!
//! Sample registries and kits used across unit and integration tests, plus
//! assertion helpers for evaluation results and a scripted prompter.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;

#[cfg(any(test, debug_assertions))]
pub mod mocks;
