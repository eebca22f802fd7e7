//! The article feed: a JSON document of practice articles plus category and
//! level metadata, loaded once at startup from a local path or an HTTP URL.
//! Picking up new articles within a session requires a full reload.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use studio_types::{Article, Category, LevelInfo};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed document is malformed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("update webhook rejected the dispatch: HTTP {0}")]
    WebhookRejected(u16),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// The feed document as published by the batch generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedDocument {
    pub date: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub categories: Vec<Category>,
    pub levels: Vec<LevelInfo>,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

pub struct ArticleFeed {
    doc: FeedDocument,
}

impl ArticleFeed {
    /// Load the feed from `location`: an http(s) URL is fetched, anything
    /// else is treated as a local path.
    pub async fn load(location: &str) -> Result<Self, FeedError> {
        let doc: FeedDocument = if location.starts_with("http://") || location.starts_with("https://")
        {
            reqwest::get(location).await?.error_for_status()?.json().await?
        } else {
            serde_json::from_str(&std::fs::read_to_string(location)?)?
        };
        tracing::info!(articles = doc.articles.len(), "article feed loaded");
        Ok(Self { doc })
    }

    pub fn from_document(doc: FeedDocument) -> Self {
        Self { doc }
    }

    pub fn articles(&self) -> &[Article] {
        &self.doc.articles
    }

    pub fn categories(&self) -> &[Category] {
        &self.doc.categories
    }

    pub fn levels(&self) -> &[LevelInfo] {
        &self.doc.levels
    }

    pub fn find(&self, id: u32) -> Option<&Article> {
        self.doc.articles.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.doc.categories.iter().find(|c| c.id == id)
    }

    pub fn level(&self, id: &str) -> Option<&LevelInfo> {
        self.doc.levels.iter().find(|l| l.id == id)
    }

    /// Filter by category/level and sort by id.
    pub fn filtered(
        &self,
        category: Option<&str>,
        level: Option<&str>,
        sort: SortOrder,
    ) -> Vec<&Article> {
        let mut list: Vec<&Article> = self
            .doc
            .articles
            .iter()
            .filter(|a| category.is_none_or(|c| a.category == c))
            .filter(|a| level.is_none_or(|l| a.level == l))
            .collect();
        match sort {
            SortOrder::Newest => list.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Oldest => list.sort_by(|a, b| a.id.cmp(&b.id)),
        }
        list
    }

    /// Articles generated within the last `days`, newest first.
    pub fn recent(&self, now: DateTime<Utc>, days: i64) -> Vec<&Article> {
        let cutoff = now - Duration::days(days);
        let mut list: Vec<&Article> = self
            .doc
            .articles
            .iter()
            .filter(|a| a.generated_at.is_some_and(|at| at > cutoff))
            .collect();
        list.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        list
    }

    /// First article not yet practiced, falling back to the first article.
    pub fn recommend(&self, practiced: &[u32]) -> Option<&Article> {
        self.doc
            .articles
            .iter()
            .find(|a| !practiced.contains(&a.id))
            .or_else(|| self.doc.articles.first())
    }
}

/// Fire the `update-articles` event at the hosting side's webhook.
/// Any 2xx (the dispatch endpoint answers 204) counts as accepted.
pub async fn dispatch_update(webhook_url: &str, token: &str) -> Result<(), FeedError> {
    if webhook_url.is_empty() {
        return Err(FeedError::NotConfigured("update webhook URL"));
    }
    if token.is_empty() {
        return Err(FeedError::NotConfigured("update webhook token"));
    }

    let response = reqwest::Client::new()
        .post(webhook_url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github+json")
        .json(&serde_json::json!({ "event_type": "update-articles" }))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FeedError::WebhookRejected(response.status().as_u16()));
    }
    tracing::info!("article update dispatched");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> ArticleFeed {
        let doc: FeedDocument = serde_json::from_str(
            r#"{
                "date": "2026-08-30",
                "categories": [{"id": "economy", "name": "경제/금융", "icon": "💹"}],
                "levels": [{"id": "beginner", "name": "초급"}],
                "articles": [
                    {"id": 1, "title": "Curated", "content": "One.", "category": "economy",
                     "level": "beginner", "source": "Reuters"},
                    {"id": 105, "title": "Generated", "content": "Two.", "category": "economy",
                     "level": "beginner", "source": "BBC", "koreanContent": "둘.",
                     "keyTerms": [{"en": "tariff", "ko": "관세"}], "wordCount": 310,
                     "generatedAt": "2026-08-29T12:00:00Z"}
                ]
            }"#,
        )
        .unwrap();
        ArticleFeed::from_document(doc)
    }

    #[test]
    fn decodes_camel_case_feed_document() {
        let feed = feed();
        let article = feed.find(105).unwrap();
        assert_eq!(article.korean_content.as_deref(), Some("둘."));
        assert_eq!(article.key_terms[0].ko, "관세");
        assert!(article.is_generated());
        assert!(feed.find(1).unwrap().is_curated());
    }

    #[test]
    fn filters_and_sorts() {
        let feed = feed();
        let newest = feed.filtered(Some("economy"), None, SortOrder::Newest);
        assert_eq!(newest[0].id, 105);
        let oldest = feed.filtered(None, Some("beginner"), SortOrder::Oldest);
        assert_eq!(oldest[0].id, 1);
        assert!(feed.filtered(Some("law"), None, SortOrder::Newest).is_empty());
    }

    #[test]
    fn recent_respects_cutoff() {
        let feed = feed();
        let now = "2026-08-30T00:00:00Z".parse().unwrap();
        assert_eq!(feed.recent(now, 7).len(), 1);
        assert!(feed.recent(now, 0).is_empty());
    }

    #[test]
    fn recommendation_skips_practiced_articles() {
        let feed = feed();
        assert_eq!(feed.recommend(&[]).unwrap().id, 1);
        assert_eq!(feed.recommend(&[1]).unwrap().id, 105);
        // Everything practiced: fall back to the first article.
        assert_eq!(feed.recommend(&[1, 105]).unwrap().id, 1);
    }
}
