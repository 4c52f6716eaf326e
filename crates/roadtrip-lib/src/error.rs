use std::path::PathBuf;

use thiserror::Error;

use crate::feeds::FeedKind;

/// Convenient result alias for the RoadTrip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A source feed could not be located at the resolved path.
    #[error("{feed} feed not found at {path}")]
    FeedNotFound { feed: FeedKind, path: PathBuf },

    /// A record had the wrong number of fields or a non-numeric distance.
    #[error("malformed {feed} record on line {line}: {message}")]
    MalformedRecord {
        feed: FeedKind,
        line: u64,
        message: String,
    },

    /// Raised when a country name is not a node of the border graph.
    #[error("unknown country name: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no chain of land borders connects two countries.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
