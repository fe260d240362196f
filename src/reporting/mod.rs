//! Run reporting
//!
//! This module contains the structured logging helpers used for
//! verbose-mode diagnostics. Contractual output (result lines and
//! invalid-URL diagnostics) is written directly by the orchestrator
//! and never goes through the logger.

pub mod logging;
