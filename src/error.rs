//! Error types for catalog construction and queries.

use thiserror::Error;

/// Seed data that fails field-level validation. Raised once at startup.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{field} = {value} is outside 0..=100")]
    ScoreOutOfRange { field: &'static str, value: u8 },

    #[error("{field} = {value} is outside [0, 1]")]
    FractionOutOfRange { field: &'static str, value: f64 },

    #[error("phrase {text:?} has start {start} after end {end}")]
    PhraseOffsets { text: String, start: usize, end: usize },

    #[error("duplicate article id {0}")]
    DuplicateArticle(String),

    #[error("duplicate narrative id {0}")]
    DuplicateNarrative(String),

    #[error("article {id}: {source}")]
    InvalidArticle {
        id: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("narrative {id}: {source}")]
    InvalidNarrative {
        id: String,
        #[source]
        source: Box<CatalogError>,
    },
}

/// Lookup failures. The display text is the human-readable detail sent to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Article not found")]
    ArticleNotFound(String),

    /// At least one side of a comparison is missing; lists the missing ids.
    #[error("Article(s) not found")]
    ArticlesNotFound(Vec<String>),
}
