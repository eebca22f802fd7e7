//! Merge policy for a regenerated feed: curated articles are permanent,
//! generated ones rotate with a retention window and a total cap.

use studio_types::Article;

/// Merge freshly generated articles into the existing corpus.
///
/// Curated articles (id <= 16) always survive. Of the previously generated
/// ones (id > 100), the newest `keep_generated` by generation time survive.
/// New articles get ids continuing above the highest surviving old id, so
/// ids never collide with retained history. The result is sorted curated
/// first, then by descending id, and capped at `max_articles`.
pub fn merge_articles(
    existing: Vec<Article>,
    mut new: Vec<Article>,
    keep_generated: usize,
    max_articles: usize,
) -> Vec<Article> {
    let mut curated: Vec<Article> = Vec::new();
    let mut old_generated: Vec<Article> = Vec::new();
    for article in existing {
        if article.is_curated() {
            curated.push(article);
        } else if article.is_generated() {
            old_generated.push(article);
        }
        // ids between the curated ceiling and the generated floor are stale
        // leftovers and are dropped
    }

    old_generated.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
    old_generated.truncate(keep_generated);

    let max_old_id = old_generated
        .iter()
        .map(|a| a.id)
        .max()
        .unwrap_or(Article::GENERATED_MIN_ID - 1);
    for (i, article) in new.iter_mut().enumerate() {
        article.id = max_old_id + 1 + i as u32;
    }

    let mut merged: Vec<Article> = curated.into_iter().chain(new).chain(old_generated).collect();
    merged.sort_by(|a, b| match (a.is_curated(), b.is_curated()) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => b.id.cmp(&a.id),
    });
    merged.truncate(max_articles);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn article(id: u32, generated: bool) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            summary: String::new(),
            content: String::new(),
            korean_content: None,
            category: "economy".into(),
            level: "intermediate".into(),
            source: "BBC".into(),
            link: None,
            key_terms: Vec::new(),
            word_count: 350,
            generated_at: generated.then(|| Utc::now() - Duration::days(id as i64)),
        }
    }

    #[test]
    fn curated_articles_always_survive() {
        let existing: Vec<Article> = (1..=16).map(|id| article(id, false)).collect();
        let new: Vec<Article> = (0..40).map(|i| article(500 + i, true)).collect();
        let merged = merge_articles(existing, new, 30, 50);

        for id in 1..=16 {
            assert!(merged.iter().any(|a| a.id == id), "curated {id} dropped");
        }
        assert!(merged.len() <= 50);
    }

    #[test]
    fn old_generated_rotate_keeping_the_newest() {
        // generated_at is newer for smaller ids in this fixture
        let existing: Vec<Article> = (101..=140).map(|id| article(id, true)).collect();
        let merged = merge_articles(existing, Vec::new(), 30, 50);

        assert_eq!(merged.len(), 30);
        assert!(merged.iter().all(|a| a.id <= 130));
    }

    #[test]
    fn new_ids_continue_above_retained_history() {
        let existing = vec![article(105, true), article(103, true)];
        let new = vec![article(0, true), article(0, true)];
        let merged = merge_articles(existing, new, 30, 50);

        let mut ids: Vec<u32> = merged.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![103, 105, 106, 107]);
    }

    #[test]
    fn empty_history_starts_generated_ids_above_the_floor() {
        let merged = merge_articles(Vec::new(), vec![article(0, true)], 30, 50);
        assert_eq!(merged[0].id, Article::GENERATED_MIN_ID);
        assert!(merged[0].is_generated());
    }

    #[test]
    fn ordering_is_curated_first_then_newest_id() {
        let existing = vec![article(3, false), article(1, false), article(120, true)];
        let new = vec![article(0, true)];
        let merged = merge_articles(existing, new, 30, 50);
        let ids: Vec<u32> = merged.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 121, 120]);
    }
}
