//! Reachability probing
//!
//! This module issues the HTTP probes and drives the concurrent
//! fan-out over candidates read from the input stream.

pub mod checker;
pub mod orchestrator;

// Re-export commonly used items
pub use checker::{CheckSite, Checker};
pub use orchestrator::run;
