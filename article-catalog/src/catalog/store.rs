//! ArticleStore: the append-only article sequence.
//!
//! Identity is positional: the article at offset `i` always carries id `i + 1`.

use super::error::{CatalogError, Result};
use article_catalog_types::{Article, ArticleDraft};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Arc<Article>>,
}

impl ArticleStore {
    /// Assign the next id to `draft` and append it.
    ///
    /// Callers must hold the catalog write lock so that id assignment and
    /// the push happen as one step.
    pub fn append(&mut self, draft: ArticleDraft) -> Arc<Article> {
        let article = Arc::new(Article::from_draft(self.articles.len(), draft));
        self.articles.push(Arc::clone(&article));
        article
    }

    /// Look up an article by its 1-based position.
    pub fn get(&self, position: usize) -> Result<Arc<Article>> {
        if position == 0 {
            return Err(CatalogError::invalid_input("need a number greater than 0"));
        }

        self.articles
            .get(position - 1)
            .cloned()
            .ok_or_else(CatalogError::not_found)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }
}
