//! In-memory article catalog.
//!
//! `Catalog` owns the article store and the tag index behind one read-write
//! lock. Creating an article (id assignment, append, tag indexing) happens
//! under the write side, so readers never see an article whose tags are only
//! partly indexed.

mod error;
mod query;
mod store;
mod tag_index;

pub use error::{CatalogError, Result};

use article_catalog_types::{Article, ArticleDraft, TagSearchResult};
use parking_lot::RwLock;
use store::ArticleStore;
use tag_index::TagIndex;

#[derive(Debug, Default)]
struct CatalogInner {
    store: ArticleStore,
    tags: TagIndex,
}

/// Counts reported by the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub article_count: usize,
    pub tag_count: usize,
}

#[derive(Debug, Default)]
pub struct Catalog {
    inner: RwLock<CatalogInner>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new article and index its tags. Never fails.
    pub fn create_article(&self, draft: ArticleDraft) -> Article {
        let mut inner = self.inner.write();
        let article = inner.store.append(draft);
        inner.tags.index(&article);
        log::debug!(
            "[CATALOG] Created article {} ({} tags)",
            article.id,
            article.tags.len()
        );
        Article::clone(&article)
    }

    /// Fetch an article by its 1-based position.
    pub fn article_by_position(&self, position: usize) -> Result<Article> {
        let inner = self.inner.read();
        inner.store.get(position).map(|a| Article::clone(&a))
    }

    /// Fetch an article by a position token taken from a request path.
    pub fn article_by_token(&self, token: &str) -> Result<Article> {
        let position = parse_position(token)?;
        self.article_by_position(position)
    }

    /// Search articles carrying `tag` that are dated `compact_date` (`YYYYMMDD`).
    pub fn search_by_tag_and_date(&self, tag: &str, compact_date: &str) -> Result<TagSearchResult> {
        let inner = self.inner.read();
        query::search(&inner.tags, tag, compact_date)
    }

    pub fn stats(&self) -> CatalogStats {
        let inner = self.inner.read();
        CatalogStats {
            article_count: inner.store.len(),
            tag_count: inner.tags.len(),
        }
    }
}

/// Parse a decimal position token. Negative and non-numeric tokens are rejected.
fn parse_position(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| CatalogError::invalid_input("need a number"))
}

/// The article the service is seeded with at startup
pub fn sample_article() -> ArticleDraft {
    ArticleDraft {
        title: "latest science shows that potato chips are better for you than sugar".to_string(),
        date: "2016-09-22".to_string(),
        body: "some text, potentially containing simple markup about how potato chips are great"
            .to_string(),
        tags: vec![
            "health".to_string(),
            "fitness".to_string(),
            "science".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn draft(date: &str, tags: &[&str]) -> ArticleDraft {
        ArticleDraft {
            title: format!("article on {}", date),
            date: date.to_string(),
            body: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_sequential_creates_are_positional() {
        let catalog = Catalog::new();
        let created: Vec<Article> = (0..5)
            .map(|_| catalog.create_article(draft("2020-01-01", &["x"])))
            .collect();

        for (i, article) in created.iter().enumerate() {
            assert_eq!(article.id, (i + 1).to_string());
            assert_eq!(&catalog.article_by_position(i + 1).unwrap(), article);
        }
        assert!(matches!(
            catalog.article_by_position(6),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.article_by_position(0),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_article_by_token() {
        let catalog = Catalog::new();
        catalog.create_article(draft("2020-01-01", &[]));

        assert_eq!(catalog.article_by_token("1").unwrap().id, "1");
        assert_eq!(
            catalog.article_by_token("0").unwrap_err(),
            CatalogError::InvalidInput("need a number greater than 0".to_string())
        );
        assert_eq!(
            catalog.article_by_token("2").unwrap_err(),
            CatalogError::NotFound("Record not found".to_string())
        );
        for bad in ["abc", "-1", "", "1.5"] {
            assert_eq!(
                catalog.article_by_token(bad).unwrap_err(),
                CatalogError::InvalidInput("need a number".to_string()),
                "token {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_created_article_is_searchable() {
        let catalog = Catalog::new();
        catalog.create_article(draft("2016-09-22", &["health"]));

        let result = catalog.search_by_tag_and_date("health", "20160922").unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.articles, vec!["1"]);
        assert!(result.related_tags.contains(&"health".to_string()));
    }

    #[test]
    fn test_search_truncates_to_most_recent() {
        let catalog = Catalog::new();
        for _ in 0..12 {
            catalog.create_article(draft("2020-01-01", &["x"]));
        }

        let result = catalog.search_by_tag_and_date("x", "20200101").unwrap();
        assert_eq!(result.count, 12);
        assert_eq!(result.articles.len(), query::MAX_RESULT_ARTICLES);
        assert_eq!(result.articles.first().map(String::as_str), Some("3"));
        assert_eq!(result.articles.last().map(String::as_str), Some("12"));
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.stats(),
            CatalogStats {
                article_count: 0,
                tag_count: 0
            }
        );

        catalog.create_article(sample_article());
        catalog.create_article(draft("2020-01-01", &["health", "food"]));
        assert_eq!(
            catalog.stats(),
            CatalogStats {
                article_count: 2,
                tag_count: 4
            }
        );
    }

    #[test]
    fn test_concurrent_creates_get_distinct_gapless_ids() {
        const WORKERS: usize = 8;
        const PER_WORKER: usize = 50;

        let catalog = Arc::new(Catalog::new());
        std::thread::scope(|s| {
            for _ in 0..WORKERS {
                let catalog = Arc::clone(&catalog);
                s.spawn(move || {
                    for _ in 0..PER_WORKER {
                        catalog.create_article(draft("2020-01-01", &["busy"]));
                    }
                });
            }
        });

        let total = WORKERS * PER_WORKER;
        let ids: HashSet<String> = (1..=total)
            .map(|p| catalog.article_by_position(p).unwrap().id)
            .collect();
        let expected: HashSet<String> = (1..=total).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
        assert!(catalog.article_by_position(total + 1).is_err());

        for position in 1..=total {
            assert_eq!(
                catalog.article_by_position(position).unwrap().id,
                position.to_string()
            );
        }

        let result = catalog.search_by_tag_and_date("busy", "20200101").unwrap();
        assert_eq!(result.count, total);
    }
}
