//! PC build validator
//!
//! Checks candidate PC build kits (CPU, motherboard, GPU, RAM, PSU) against a
//! component inventory and a total budget, and picks the highest-scoring
//! valid kit.

pub mod check;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod test_utils;

pub use crate::core::{
    validate_builds, BestBuild, BuildKit, Component, ComponentKind, ComponentRegistry,
    ComponentSpec, EvaluationResult, Evaluator, FailureReason, ValidationOutcome, NO_BEST_KIT,
};
pub use crate::error::{Result, ValidatorError};
