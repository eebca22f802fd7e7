//! Batch article generation: pull one headline per RSS feed, expand each
//! into a 350-450 word practice article through the relay, and merge the
//! results into the feed document.

use std::fs;
use std::time::Duration;

use anyhow::{Context, bail};
use chrono::Utc;
use studio_articles::FeedDocument;
use studio_config::Config;
use studio_feedback::{Provider, RelayModel};
use studio_types::{Article, Category, LevelInfo};

pub mod expand;
pub mod merge;
pub mod rss;

use expand::{count_words, expand_article};
use merge::merge_articles;
use rss::{RSS_FEEDS, RssParser, fetch_items};

// Expansion needs more room than feedback scoring.
const EXPANSION_MAX_TOKENS: u32 = 2500;

fn categories() -> Vec<Category> {
    let entry = |id: &str, name: &str, icon: &str, description: &str| Category {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        description: description.into(),
    };
    vec![
        entry("economy", "경제/금융", "💹", "거시경제, 통화정책, 금융시장"),
        entry("politics", "국제정치/외교", "🌍", "외교, 안보, 국제관계"),
        entry("law", "법률/규제", "⚖️", "국제법, 통상법, 규제"),
        entry("health", "의료/보건", "🏥", "공중보건, 의료정책, 제약"),
        entry("tech", "기술/IT", "💻", "AI, 반도체, 디지털 전환"),
    ]
}

fn levels() -> Vec<LevelInfo> {
    let entry = |id: &str, name: &str, icon: &str, description: &str| LevelInfo {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        description: description.into(),
    };
    vec![
        entry("beginner", "초급", "🌱", "기초 어휘와 단순한 문장 구조"),
        entry("intermediate", "중급", "📚", "전문 용어와 복합 문장"),
        entry("advanced", "고급", "🎓", "고급 표현과 뉘앙스"),
        entry("expert", "심화", "👑", "실전 통역 수준의 고난도 텍스트"),
    ]
}

/// Headlines under 20 chars are navigation cruft, not articles.
fn usable_title(title: &str) -> bool {
    title.chars().count() >= 20
}

fn truncate_summary(description: &str) -> String {
    if description.chars().count() <= 200 {
        return description.to_string();
    }
    let cut: String = description.chars().take(200).collect();
    format!("{cut}...")
}

pub async fn run(config: &Config, dry_run: bool) -> anyhow::Result<()> {
    if config.articles.feed.starts_with("http://") || config.articles.feed.starts_with("https://") {
        bail!("generation needs a writable local feed path, got URL {}", config.articles.feed);
    }
    if !config.relay.is_configured() {
        bail!("STUDIO_RELAY_URL is not set; article expansion needs the AI relay");
    }

    let model = RelayModel::new(
        config.relay.url.clone(),
        Provider::Claude,
        config.feedback.premium_model.clone(),
        EXPANSION_MAX_TOKENS,
        config.feedback.premium_model.clone(),
    );
    let client = reqwest::Client::new();
    let parser = RssParser::new();
    let generator = &config.generator;

    println!("🦜 기사 업데이트 시작\n{}", "=".repeat(50));

    let mut new_articles: Vec<Article> = Vec::new();
    for (category, feeds) in RSS_FEEDS {
        println!("\n📰 [{}] 카테고리", category.to_uppercase());

        for feed in *feeds {
            println!("  📡 {} 피드...", feed.source);
            let items = fetch_items(&client, &parser, feed.url, generator.fetch_timeout_secs).await;
            // One headline per feed per run keeps the corpus balanced.
            let Some(item) = items.into_iter().next() else {
                println!("    (기사 없음)");
                continue;
            };
            if !usable_title(&item.title) {
                continue;
            }
            println!("    \"{}\"", item.title.chars().take(50).collect::<String>());

            let Some(expanded) = expand_article(
                &model,
                &item.title,
                &item.description,
                category,
                feed.source,
                generator.min_word_count,
            )
            .await
            else {
                tokio::time::sleep(Duration::from_millis(generator.pause_ms)).await;
                continue;
            };

            let word_count = count_words(&expanded.content) as u32;
            println!("    ✓ 확장 완료: {word_count}단어 ({})", expanded.level);
            new_articles.push(Article {
                id: 0, // assigned by the merge
                title: item.title,
                summary: truncate_summary(&item.description),
                content: expanded.content,
                korean_content: None,
                category: (*category).to_string(),
                level: expanded.level,
                source: feed.source.to_string(),
                link: item.link,
                key_terms: expanded.key_terms,
                word_count,
                generated_at: Some(Utc::now()),
            });

            tokio::time::sleep(Duration::from_millis(generator.pause_ms)).await;
        }
    }

    println!("\n{}\n✅ 새로 생성된 기사: {}개", "=".repeat(50), new_articles.len());

    let existing: FeedDocument = match fs::read_to_string(&config.articles.feed) {
        Ok(data) => serde_json::from_str(&data)
            .with_context(|| format!("existing feed at {} is malformed", config.articles.feed))?,
        Err(_) => {
            println!("기존 피드 없음, 새로 생성");
            FeedDocument::default()
        }
    };

    let new_count = new_articles.len();
    let articles = merge_articles(
        existing.articles,
        new_articles,
        generator.keep_generated,
        generator.max_articles,
    );

    let curated = articles.iter().filter(|a| a.is_curated()).count();
    println!("\n📊 최종 결과:");
    println!("   - 기본 기사: {curated}개");
    println!("   - 새 기사: {new_count}개");
    println!("   - 총 기사: {}개", articles.len());

    let word_counts: Vec<usize> = articles.iter().map(|a| count_words(&a.content)).collect();
    if let (Some(min), Some(max)) = (word_counts.iter().min(), word_counts.iter().max()) {
        let avg = word_counts.iter().sum::<usize>() / word_counts.len();
        println!("   - 단어 수: 최소 {min} / 최대 {max} / 평균 {avg}");
    }

    if dry_run {
        println!("\n(dry run이라 피드 문서는 쓰지 않았습니다)");
        return Ok(());
    }

    let now = Utc::now();
    let doc = FeedDocument {
        date: Some(now.format("%Y-%m-%d").to_string()),
        updated_at: Some(now),
        categories: categories(),
        levels: levels(),
        articles,
    };
    if let Some(parent) = std::path::Path::new(&config.articles.feed).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.articles.feed, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("failed to write feed to {}", config.articles.feed))?;
    println!("\n피드 저장됨: {}", config.articles.feed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_level_tables_match_feed_ids() {
        let cats = categories();
        for (id, _) in RSS_FEEDS {
            assert!(cats.iter().any(|c| c.id == *id), "no category metadata for {id}");
        }
        let lv = levels();
        let ids: Vec<&str> = lv.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["beginner", "intermediate", "advanced", "expert"]);
    }

    #[test]
    fn title_filter_counts_chars_not_bytes() {
        // 20 Korean chars is 60 bytes; the cutoff is on chars.
        assert!(usable_title(&"금".repeat(20)));
        assert!(!usable_title(&"금".repeat(19)));
        assert!(!usable_title("Short headline"));
        assert!(usable_title("Central bank holds rates steady"));
    }

    #[test]
    fn summaries_are_truncated_on_char_boundaries() {
        let short = "질병 통제 센터 발표";
        assert_eq!(truncate_summary(short), short);

        let long = "가".repeat(250);
        let truncated = truncate_summary(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }
}
