use url::Url;

/// Determine whether a trimmed input line is a well-formed absolute URL.
///
/// The check is purely syntactic: the string must carry a scheme and parse
/// under the standard URL grammar. Relative references, schemeless strings
/// and empty strings are rejected. The scheme itself is not restricted, so
/// a URL the prober cannot speak (e.g. `ftp://`) is still a valid candidate
/// and will simply probe as down.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}
