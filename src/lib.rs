//! Bias Lab API
//!
//! Read-only HTTP API serving media bias assessments for news articles
//! about a single story cluster, plus narrative summaries and pairwise
//! comparisons.
//!
//! - `models`: article, narrative and bias score records
//! - `seed`: the built-in article and narrative data
//! - `catalog`: immutable in-memory store and its read operations
//! - `comparison`: bias deltas between two articles
//! - `api_server`: Axum router and handlers (feature `api`)

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::Catalog;
pub use comparison::{BiasDelta, Comparison};
pub use error::{CatalogError, QueryError};
pub use models::{Article, BiasDimension, BiasScores, BiasedPhrase, Narrative, SourceLean};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
