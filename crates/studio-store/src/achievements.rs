use crate::state::StoreState;

/// A static achievement definition. Unlock state lives in the store as an
/// append-only id set; the rule is evaluated against the whole state.
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rule: fn(&StoreState) -> bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_article",
        name: "첫 걸음",
        icon: "📰",
        description: "첫 기사를 열어보기",
        category: "special",
        rule: |s| !s.history.is_empty(),
    },
    Achievement {
        id: "first_session",
        name: "데뷔전",
        icon: "✍️",
        description: "첫 연습 세션 완료",
        category: "translations",
        rule: |s| !s.archive.is_empty(),
    },
    Achievement {
        id: "ten_sessions",
        name: "꾸준한 연습생",
        icon: "🔟",
        description: "연습 세션 10회 완료",
        category: "translations",
        rule: |s| s.archive.len() >= 10,
    },
    Achievement {
        id: "fifty_sessions",
        name: "번역 기계",
        icon: "⚙️",
        description: "연습 세션 50회 완료",
        category: "translations",
        rule: |s| s.archive.len() >= 50,
    },
    Achievement {
        id: "perfect_score",
        name: "만점의 순간",
        icon: "💯",
        description: "평균 90점 이상 세션",
        category: "translations",
        rule: |s| s.archive.iter().any(|a| a.average_score >= 90),
    },
    Achievement {
        id: "word_collector",
        name: "단어 수집가",
        icon: "📖",
        description: "단어 30개 저장",
        category: "vocabulary",
        rule: |s| s.vocabulary.len() >= 30,
    },
    Achievement {
        id: "word_hoarder",
        name: "단어 부자",
        icon: "💰",
        description: "단어 100개 저장",
        category: "vocabulary",
        rule: |s| s.vocabulary.len() >= 100,
    },
    Achievement {
        id: "first_mastery",
        name: "완전 정복",
        icon: "🏆",
        description: "단어 10개 마스터",
        category: "vocabulary",
        rule: |s| s.vocabulary.iter().filter(|w| w.mastered).count() >= 10,
    },
    Achievement {
        id: "level_5",
        name: "성장기",
        icon: "🌿",
        description: "레벨 5 달성",
        category: "special",
        rule: |s| s.level.level >= 5,
    },
    Achievement {
        id: "level_10",
        name: "프로의 길",
        icon: "🌳",
        description: "레벨 10 달성",
        category: "special",
        rule: |s| s.level.level >= 10,
    },
    Achievement {
        id: "week_streak",
        name: "일주일의 기적",
        icon: "🔥",
        description: "7일 연속 학습",
        category: "streak",
        rule: |s| s.streak.best >= 7,
    },
    Achievement {
        id: "month_streak",
        name: "한 달의 집념",
        icon: "🌋",
        description: "30일 연속 학습",
        category: "streak",
        rule: |s| s.streak.best >= 30,
    },
];

pub fn by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn by_category(category: &str) -> Vec<&'static Achievement> {
    if category == "all" {
        ACHIEVEMENTS.iter().collect()
    } else {
        ACHIEVEMENTS.iter().filter(|a| a.category == category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_partition_the_table() {
        let categorized: usize = ["translations", "vocabulary", "streak", "special"]
            .into_iter()
            .map(|c| by_category(c).len())
            .sum();
        assert_eq!(categorized, ACHIEVEMENTS.len());
        assert_eq!(by_category("all").len(), ACHIEVEMENTS.len());
        assert!(by_category("no_such_category").is_empty());
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        for achievement in ACHIEVEMENTS {
            assert_eq!(by_id(achievement.id).map(|a| a.id), Some(achievement.id));
        }
        let mut ids: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }
}
