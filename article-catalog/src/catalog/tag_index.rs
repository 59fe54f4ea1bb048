//! TagIndex: tag value -> articles carrying it, in creation order.

use article_catalog_types::Article;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct TagIndex {
    buckets: HashMap<String, Vec<Arc<Article>>>,
}

impl TagIndex {
    /// Append `article` to the bucket of every tag it lists.
    /// A tag listed twice is indexed twice.
    pub fn index(&mut self, article: &Arc<Article>) {
        for tag in &article.tags {
            self.buckets
                .entry(tag.clone())
                .or_default()
                .push(Arc::clone(article));
        }
    }

    /// Articles indexed under `tag`; empty when the tag is unknown.
    pub fn lookup(&self, tag: &str) -> &[Arc<Article>] {
        self.buckets.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}
