use chrono::Duration;
use studio_config::Config;
use studio_store::{StudioStore, achievements};

use super::{open_store, today};

const GRASS_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let today = today();

    let fortune = store.fortune_of_the_day(today, rand::random::<u32>() as usize)?;
    let state = store.state();

    println!(
        "{}{} — Lv.{} {}",
        state.profile.nickname, state.profile.studio_name, state.level.level,
        store.title(),
    );
    println!(
        "EXP {} / {} · 🔥 연속 {}일 (최고 {}일) · 🎟️ 티켓 {}장",
        state.level.exp,
        store.exp_for_next_level(),
        state.streak.count,
        state.streak.best,
        state.gacha_tickets,
    );

    let daily = store.daily_progress(today);
    println!(
        "오늘: 기사 {} · 번역 {} · 단어 {} · 퀴즈 {} · {}분 (목표 {}분)",
        mark(daily.article),
        mark(daily.translate),
        mark(daily.vocab),
        mark(daily.quiz),
        daily.time,
        state.settings.daily_goal,
    );

    let mastered = state.vocabulary.iter().filter(|w| w.mastered).count();
    println!(
        "단어장: {}개 (마스터 {}개, 복습 대기 {}개) · 아카이브 {}건 · 퀴즈 최고 {}점",
        state.vocabulary.len(),
        mastered,
        store.review_words().len(),
        state.archive.len(),
        store.game_best("quiz"),
    );

    let badges: Vec<String> = [
        ("translations", "번역"),
        ("vocabulary", "단어"),
        ("streak", "연속"),
        ("special", "특별"),
    ]
    .into_iter()
    .map(|(category, label)| {
        let all = achievements::by_category(category);
        let unlocked = all
            .iter()
            .filter(|a| state.achievements.iter().any(|id| id == a.id))
            .count();
        format!("{label} {unlocked}/{}", all.len())
    })
    .collect();
    println!("업적: {}", badges.join(" · "));

    // Last four weeks of the heatmap, oldest day first.
    let grass: String = (0..28)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            GRASS_GLYPHS[store.grass_level_on(day) as usize]
        })
        .collect();
    println!("잔디(4주): {grass}");

    if let Some(dday) = &state.dday {
        let diff = (dday.date - today).num_days();
        let label = if diff >= 0 {
            format!("D-{diff}")
        } else {
            format!("D+{}", -diff)
        };
        println!("{label} {}", dday.name);
    }

    println!("🔮 오늘의 운세: {} · 행운의 표현: {}", fortune.text, fortune.word);

    print_recommendation_hint(&store);
    Ok(())
}

fn mark(done: bool) -> char {
    if done { '●' } else { '○' }
}

fn print_recommendation_hint(store: &StudioStore) {
    if store.archive().is_empty() {
        println!("`studio practice` 로 첫 세션을 시작해보세요!");
    }
}
