//! News feed client: fetches headline items for a category and filters them
//! down to the usable set.

use serde::Deserialize;
use tracing::info;

use crate::{
    error::{NewsreelError, Result},
    types::NewsItem,
};

pub const DEFAULT_BASE_URL: &str = "https://inshorts-api.vercel.app/news";

/// Most items a single briefing will narrate.
pub const MAX_ITEMS: usize = 12;

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    data: Vec<NewsItem>,
}

#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the feed for a category. Non-2xx responses and transport errors
    /// are upstream failures; an empty filtered set is `NoContent`.
    pub async fn fetch(&self, category: &str) -> Result<Vec<NewsItem>> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("category", category)])
            .send()
            .await
            .map_err(|e| NewsreelError::UpstreamUnavailable {
                category: category.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(NewsreelError::UpstreamUnavailable {
                category: category.to_string(),
                reason: format!("status {}", response.status()),
            });
        }

        let feed: FeedResponse = response.json().await?;
        let items = select_items(feed.data, category)?;

        info!(category, count = items.len(), "fetched news items");
        Ok(items)
    }
}

/// Decide the usable item set for a fetched feed: filter, cap, and fail with
/// `NoContent` when nothing survives.
pub fn select_items(items: Vec<NewsItem>, category: &str) -> Result<Vec<NewsItem>> {
    let items = filter_items(items);
    if items.is_empty() {
        return Err(NewsreelError::NoContent {
            category: category.to_string(),
        });
    }
    Ok(items)
}

/// Keep only items with a non-empty title AND content, capped at
/// [`MAX_ITEMS`].
pub fn filter_items(items: Vec<NewsItem>) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| !item.title.trim().is_empty() && !item.content.trim().is_empty())
        .take(MAX_ITEMS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, content: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            content: content.to_string(),
            author: None,
            read_more_url: None,
            date: None,
        }
    }

    #[test]
    fn blank_title_or_content_is_dropped() {
        let kept = filter_items(vec![
            item("ok", "ok"),
            item("", "body"),
            item("head", "   "),
            item("also ok", "fine"),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "ok");
        assert_eq!(kept[1].title, "also ok");
    }

    #[test]
    fn feed_with_no_usable_items_is_no_content() {
        // Items exist upstream but none pass the filter; the run must stop
        // here, before any synthesis work.
        let err = select_items(vec![item("", "body"), item("head", "  ")], "national");
        assert!(matches!(
            err,
            Err(NewsreelError::NoContent { category }) if category == "national"
        ));

        let err = select_items(Vec::new(), "sports");
        assert!(matches!(err, Err(NewsreelError::NoContent { .. })));
    }

    #[test]
    fn usable_items_pass_selection() {
        let kept = select_items(vec![item("t", "c")], "national").unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn items_are_capped() {
        let many: Vec<NewsItem> = (0..30).map(|i| item(&format!("t{i}"), "c")).collect();
        assert_eq!(filter_items(many).len(), MAX_ITEMS);
    }

    #[test]
    fn feed_response_tolerates_missing_data_field() {
        let feed: FeedResponse = serde_json::from_str("{}").unwrap();
        assert!(feed.data.is_empty());
    }

    #[test]
    fn feed_response_decodes_items() {
        let feed: FeedResponse = serde_json::from_str(
            r#"{"data":[{"title":"t","content":"c","author":"a"}]}"#,
        )
        .unwrap();
        assert_eq!(feed.data.len(), 1);
        assert_eq!(feed.data[0].author.as_deref(), Some("a"));
    }
}
