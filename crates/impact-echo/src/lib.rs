//! Mock verification service assigning heuristic trust scores to donation evidence.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod verification;
