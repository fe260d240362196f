use std::cmp::Ordering;
use std::fmt;

use crate::core::constants::outcomes;

/// Binary classification of a probe.
///
/// `Up` means any HTTP response was received, regardless of status code.
/// `Down` means the request could not be completed at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Up,
    Down,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Up => write!(f, "{}", outcomes::UP),
            Outcome::Down => write!(f, "{}", outcomes::DOWN),
        }
    }
}

/// The result of probing a single site.
///
/// `site` is the candidate URL exactly as it was read from the input, with
/// no normalization. `detail` carries the protocol status line for an `Up`
/// outcome (e.g. "200 OK") and the transport error text for a `Down` one.
#[derive(Debug, Eq, Clone)]
pub struct ProbeResult {
    pub site: String,
    pub outcome: Outcome,
    pub detail: String,
}

impl ProbeResult {
    /// Create a result for a site that answered with an HTTP response.
    pub fn up(site: String, status_line: String) -> Self {
        Self {
            site,
            outcome: Outcome::Up,
            detail: status_line,
        }
    }

    /// Create a result for a site whose request failed at the transport level.
    pub fn down(site: String, error_text: String) -> Self {
        Self {
            site,
            outcome: Outcome::Down,
            detail: error_text,
        }
    }

    pub fn is_up(&self) -> bool {
        self.outcome == Outcome::Up
    }

    pub fn is_down(&self) -> bool {
        !self.is_up()
    }
}

impl Ord for ProbeResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.site.cmp(&other.site)
    }
}

impl PartialOrd for ProbeResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ProbeResult {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site && self.outcome == other.outcome && self.detail == other.detail
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.site, self.outcome, self.detail)
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Sites that answered with an HTTP response
    pub up: usize,
    /// Sites whose request failed at the transport level
    pub down: usize,
    /// Input lines rejected by the validator (blank lines included)
    pub invalid: usize,
}

impl RunReport {
    /// Number of sites actually probed.
    pub fn probed(&self) -> usize {
        self.up + self.down
    }

    pub fn record(&mut self, result: &ProbeResult) {
        match result.outcome {
            Outcome::Up => self.up += 1,
            Outcome::Down => self.down += 1,
        }
    }
}
