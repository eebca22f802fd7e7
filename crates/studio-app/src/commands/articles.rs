use anyhow::Context;
use chrono::Utc;
use studio_articles::{ArticleFeed, SortOrder};
use studio_config::Config;

pub async fn run(
    config: &Config,
    category: Option<String>,
    level: Option<String>,
    oldest: bool,
    recent: Option<i64>,
) -> anyhow::Result<()> {
    let feed = ArticleFeed::load(&config.articles.feed)
        .await
        .context("기사 로딩 실패")?;

    let list = match recent {
        Some(days) => feed.recent(Utc::now(), days),
        None => {
            let sort = if oldest { SortOrder::Oldest } else { SortOrder::Newest };
            feed.filtered(category.as_deref(), level.as_deref(), sort)
        }
    };
    if list.is_empty() {
        println!("기사 없음");
        return Ok(());
    }

    for article in &list {
        let badge = if article.is_generated() { " 🤖" } else { "" };
        println!(
            "{:>4}{badge}  [{} · {}] {} ({}단어, {})",
            article.id, article.category, article.level, article.title, article.word_count,
            article.source,
        );
    }
    println!("총 {}개", list.len());
    Ok(())
}
