//! Catalog - immutable in-memory store of articles and narratives
//!
//! Built once at startup and shared read-only across request handlers.
//! Lookups by id go through an FxHashMap; listing walks the articles in
//! insertion order.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use crate::comparison::Comparison;
use crate::error::{CatalogError, QueryError};
use crate::models::{Article, Narrative};
use crate::seed;

/// Page size used when a caller gives no limit.
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug)]
pub struct Catalog {
    articles: Vec<Article>,
    narratives: Vec<Narrative>,
    /// Article id -> position in `articles`
    by_id: FxHashMap<String, usize>,
}

impl Catalog {
    /// Validate every record and index articles by id.
    pub fn new(articles: Vec<Article>, narratives: Vec<Narrative>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();
        for (idx, article) in articles.iter().enumerate() {
            article.validate()?;
            if by_id.insert(article.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateArticle(article.id.clone()));
            }
        }

        for (idx, narrative) in narratives.iter().enumerate() {
            narrative.validate()?;
            if narratives[..idx].iter().any(|n| n.id == narrative.id) {
                return Err(CatalogError::DuplicateNarrative(narrative.id.clone()));
            }
        }

        Ok(Self { articles, narratives, by_id })
    }

    /// The built-in seed data, stamped with `published`.
    pub fn seeded(published: DateTime<Utc>) -> Result<Self, CatalogError> {
        let catalog = Self::new(seed::articles(published), seed::narratives())?;
        tracing::debug!(
            "Seeded catalog with {} articles and {} narratives",
            catalog.articles.len(),
            catalog.narratives.len()
        );
        Ok(catalog)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// First `limit` articles in catalog order, optionally restricted to one
    /// narrative cluster (exact, case-sensitive match).
    ///
    /// A limit of zero or below yields nothing. An unknown narrative yields nothing.
    pub fn list_articles(&self, limit: i64, narrative: Option<&str>) -> Vec<&Article> {
        let take = usize::try_from(limit).unwrap_or(0);

        self.articles
            .iter()
            .filter(|a| narrative.map_or(true, |n| a.narrative_cluster == n))
            .take(take)
            .collect()
    }

    pub fn get_article(&self, id: &str) -> Result<&Article, QueryError> {
        self.find(id)
            .ok_or_else(|| QueryError::ArticleNotFound(id.to_string()))
    }

    pub fn list_narratives(&self) -> &[Narrative] {
        &self.narratives
    }

    /// Compare two articles. Fails if either id is unknown.
    pub fn compare(&self, id1: &str, id2: &str) -> Result<Comparison<'_>, QueryError> {
        match (self.find(id1), self.find(id2)) {
            (Some(a), Some(b)) => Ok(Comparison::new(a, b)),
            (first, second) => {
                let mut missing = Vec::new();
                if first.is_none() {
                    missing.push(id1.to_string());
                }
                if second.is_none() {
                    missing.push(id2.to_string());
                }
                Err(QueryError::ArticlesNotFound(missing))
            }
        }
    }

    fn find(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|&idx| &self.articles[idx])
    }
}
