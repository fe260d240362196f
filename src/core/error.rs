use std::fmt;

/// Error types for siteup operations
#[derive(Debug)]
pub enum SiteUpError {
    /// IO error (stream reads, writes to the output sink)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SiteUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteUpError::Io(err) => write!(f, "IO error: {err}"),
            SiteUpError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SiteUpError::Http(err) => write!(f, "HTTP error: {err}"),
            SiteUpError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SiteUpError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SiteUpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteUpError::Io(err) => Some(err),
            SiteUpError::Http(err) => Some(err),
            SiteUpError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteUpError {
    fn from(err: std::io::Error) -> Self {
        SiteUpError::Io(err)
    }
}

impl From<reqwest::Error> for SiteUpError {
    fn from(err: reqwest::Error) -> Self {
        SiteUpError::Http(err)
    }
}

impl From<toml::de::Error> for SiteUpError {
    fn from(err: toml::de::Error) -> Self {
        SiteUpError::TomlParsing(err)
    }
}

/// Type alias for Results using SiteUpError
pub type Result<T> = std::result::Result<T, SiteUpError>;
