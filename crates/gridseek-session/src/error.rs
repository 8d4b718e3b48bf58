use std::fmt;

use gridseek_core::{GridError, TypeKind};
use gridseek_paths::SearchError;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Grid(GridError),
    Search(SearchError),
    /// The grid cannot be edited while a search is running.
    Busy,
    /// Queued, Visited and Path are set by searches only.
    NotAlgorithmicInput(TypeKind),
    /// `Step` was requested with no search started.
    NoSearch,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Busy => f.write_str("a search is running; reset it before editing"),
            Self::NotAlgorithmicInput(kind) => {
                write!(f, "{kind} cells are set by the search, not by input")
            }
            Self::NoSearch => f.write_str("no search has been started"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wraps_inner_errors_as_source() {
        let err: SessionError = SearchError::MissingTarget.into();
        assert_eq!(err.to_string(), "search error: search needs a TARGET cell");
        assert!(err.source().is_some());

        let err: SessionError = GridError::InvalidSize { columns: 0, rows: 2 }.into();
        assert!(matches!(err, SessionError::Grid(_)));
        assert!(SessionError::Busy.source().is_none());
        assert_eq!(
            SessionError::NotAlgorithmicInput(TypeKind::Path).to_string(),
            "PATH cells are set by the search, not by input"
        );
    }
}
