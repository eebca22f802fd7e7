use anyhow::Context;
use studio_articles::ArticleFeed;
use studio_config::Config;
use studio_session::PracticeSession;
use studio_store::DailyUpdate;
use studio_types::{Direction, SessionKind};

use crate::controller::PracticeController;
use crate::events::PracticeContext;

use super::{feedback_client, open_store, today};

pub async fn run(
    config: &Config,
    article_id: Option<u32>,
    interpret: bool,
    ko_en: bool,
) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let feed = ArticleFeed::load(&config.articles.feed)
        .await
        .context("기사 로딩 실패")?;

    let practiced: Vec<u32> = store.history().iter().map(|h| h.article_id).collect();
    let article = match article_id {
        Some(id) => feed.find(id).with_context(|| format!("기사 {id} 없음"))?,
        None => feed.recommend(&practiced).context("피드에 기사가 없습니다")?,
    }
    .clone();

    if !config.relay.is_configured() {
        println!("⚠️ AI 릴레이 URL(STUDIO_RELAY_URL)이 설정되지 않았습니다. 첨삭은 기본값으로 대체됩니다.");
    }

    let kind = if interpret {
        SessionKind::Interpretation
    } else {
        SessionKind::Translation
    };
    let direction = if ko_en { Direction::KoEn } else { Direction::EnKo };

    let today = today();
    store.record_history(article.id, today)?;
    store.update_daily(
        today,
        DailyUpdate {
            article: true,
            ..Default::default()
        },
    )?;
    store.update_streak(today)?;
    for achievement in store.check_achievements()? {
        println!("🏅 업적 달성: {} {}", achievement.icon, achievement.name);
    }

    let category = feed
        .category(&article.category)
        .map(|c| format!("{} {}", c.icon, c.name))
        .unwrap_or_else(|| article.category.clone());
    let level = feed
        .level(&article.level)
        .map(|l| format!("{} {}", l.icon, l.name))
        .unwrap_or_else(|| article.level.clone());

    let Some(session) = PracticeSession::start(article.clone(), kind, direction) else {
        println!("기사에 내용이 없습니다.");
        return Ok(());
    };

    println!("═══ {} ═══", article.title);
    println!("{category} · {level} · {} · {}", article.source, direction.label());
    if !article.key_terms.is_empty() {
        println!("핵심 용어 {}개 (/terms 로 보기)", article.key_terms.len());
    }
    println!("번역문을 입력하세요. 명령은 /help 참고.");

    let ctx = PracticeContext {
        store,
        session,
        client: feedback_client(config),
        today,
    };

    let controller = PracticeController::new();
    let mut tasks = controller.spawn_tasks(ctx);

    // The event loop cancels the token when the session ends; the first
    // finished task pulls the rug out from under the other.
    if let Some(result) = tasks.join_next().await {
        if let Err(e) = result? {
            tracing::error!("practice task failed: {e}");
        }
    }
    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::warn!("practice task exited: {e}");
        }
    }

    Ok(())
}
