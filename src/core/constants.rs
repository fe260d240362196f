/// Application-wide constants to avoid magic values throughout the codebase.
/// Outcome labels used in result lines
pub mod outcomes {
    /// A response was received, regardless of status code
    pub const UP: &str = "UP";
    /// The request could not be completed at the transport level
    pub const DOWN: &str = "DOWN";
}

/// Diagnostic prefixes written to standard error
pub mod diagnostics {
    /// Prefix for input lines rejected by the URL validator
    pub const INVALID_URL_PREFIX: &str = "invalid URL:  ";
    /// Prefix for a failed read on the input stream itself
    pub const STDIN_READ_PREFIX: &str = "reading standard input:  ";
}

/// Default configuration values
pub mod defaults {
    /// Probe with HEAD requests unless configured otherwise
    pub const USE_HEAD_REQUESTS: bool = true;
    /// Redirect hops followed before a probe gives up
    pub const MAX_REDIRECTS: usize = 10;
    /// Upper bound on idle pooled connections per host
    pub const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 20;
}
