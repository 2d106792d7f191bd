//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
///
/// Nothing here is fatal to the page: missing DOM collaborators are
/// skipped at their use sites, and fetch/parse failures are logged at the
/// boundary of each independent fetch operation, leaving whatever the
/// page last displayed untouched.
#[derive(Debug)]
pub enum FolioError {
    /// Transport failure or non-OK HTTP status while fetching the scholar
    /// document.
    Fetch(String),
    /// Malformed JSON in the scholar document or a config override.
    Parse(String),
    /// A DOM collaborator was missing or unusable.
    Dom(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
