//! Test support utilities for the campus auth backend
//!
//! Shared between unit and integration tests: idempotent logging setup and
//! assertions for the Problem Details error contract.

pub mod logging;
pub mod problem_details;
