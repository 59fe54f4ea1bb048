//! Tag + date search over the tag index.
//!
//! Dates arrive in compact `YYYYMMDD` form and are resliced to `YYYY-MM-DD`
//! before being compared against stored article dates. No calendar checks are
//! made; `20161340` becomes `2016-13-40` and simply matches nothing.

use super::error::{CatalogError, Result};
use super::tag_index::TagIndex;
use article_catalog_types::TagSearchResult;
use std::collections::BTreeSet;

/// Maximum number of article ids returned by a search
pub const MAX_RESULT_ARTICLES: usize = 10;

const COMPACT_DATE_LEN: usize = 8;

/// Convert a compact `YYYYMMDD` date into `YYYY-MM-DD`.
pub fn expand_compact_date(raw: &str) -> Result<String> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != COMPACT_DATE_LEN {
        return Err(CatalogError::invalid_input("Invalid date format"));
    }

    let year: String = chars[0..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..8].iter().collect();
    Ok(format!("{}-{}-{}", year, month, day))
}

/// Find the articles tagged `tag` whose date is `raw_date`.
///
/// `count` covers every match; `articles` keeps only the last
/// [`MAX_RESULT_ARTICLES`] ids in index order.
pub fn search(index: &TagIndex, tag: &str, raw_date: &str) -> Result<TagSearchResult> {
    let bucket = index.lookup(tag);
    if bucket.is_empty() {
        return Err(CatalogError::not_found());
    }

    let date = expand_compact_date(raw_date)?;

    let mut articles = Vec::new();
    let mut related: BTreeSet<&str> = BTreeSet::new();

    for article in bucket.iter().filter(|a| a.date == date) {
        articles.push(article.id.clone());
        related.extend(article.tags.iter().map(String::as_str));
    }

    let count = articles.len();
    if count > MAX_RESULT_ARTICLES {
        articles.drain(..count - MAX_RESULT_ARTICLES);
    }

    Ok(TagSearchResult {
        tag: tag.to_string(),
        count,
        articles,
        related_tags: related.into_iter().map(str::to_string).collect(),
    })
}
