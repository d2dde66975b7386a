//! Loan eligibility decisions for applicants identified by a Baltic personal code.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
