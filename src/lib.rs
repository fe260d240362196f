//! Concurrent reachability checks for URLs read from standard input.
//!
//! Each input line is trimmed and validated as an absolute URL. Valid lines
//! are probed concurrently with a single HTTP request each; every probe
//! yields exactly one result line, `<site> UP <status>` or
//! `<site> DOWN <error>`, printed in completion order. Invalid lines are
//! reported on standard error and never probed.

pub mod config;
pub mod core;
pub mod discovery;
pub mod probe;
pub mod reporting;
pub mod ui;

// Re-export the central types at the crate root
pub use crate::core::types::{Outcome, ProbeResult, RunReport};
pub use crate::probe::{CheckSite, Checker};
