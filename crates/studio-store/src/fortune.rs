//! Fortune of the day: drawn once per calendar day and pinned to that day.
//! The day-boundary decision takes the caller's date, like the streak and
//! daily modules.

use chrono::NaiveDate;

use crate::state::FortuneState;

/// A daily fortune: a message plus a lucky expression to study.
pub struct Fortune {
    pub text: &'static str,
    pub word: &'static str,
}

pub const FORTUNES: &[Fortune] = &[
    Fortune {
        text: "오늘은 막힘없이 문장이 풀리는 날! 어려운 기사에 도전해보세요.",
        word: "breakthrough (돌파구)",
    },
    Fortune {
        text: "작은 실수가 큰 배움이 되는 날. 첨삭을 꼼꼼히 읽어보세요.",
        word: "resilience (회복력)",
    },
    Fortune {
        text: "단어 하나가 통역의 품격을 바꿉니다. 오늘 새 단어 3개!",
        word: "nuance (뉘앙스)",
    },
    Fortune {
        text: "꾸준함이 재능을 이기는 날입니다. 연속 기록을 지켜보세요.",
        word: "momentum (추진력)",
    },
    Fortune {
        text: "귀가 트이는 날! 통역 연습이 잘 풀릴 거예요.",
        word: "articulate (명료하게 표현하다)",
    },
    Fortune {
        text: "복습이 행운을 부르는 날. 별표 단어를 다시 살펴보세요.",
        word: "consolidate (공고히 하다)",
    },
    Fortune {
        text: "예상 밖의 좋은 점수를 받게 될지도? 과감하게 제출해보세요.",
        word: "serendipity (뜻밖의 행운)",
    },
    Fortune {
        text: "오늘의 한 문장이 내일의 실력이 됩니다.",
        word: "incremental (점진적인)",
    },
];

/// Index of today's fortune. Same day returns the pinned index; a new day
/// maps `roll` into the table.
pub fn refresh(current: Option<&FortuneState>, today: NaiveDate, roll: usize) -> usize {
    match current {
        Some(f) if f.date == today => f.index,
        _ => roll % FORTUNES.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_keeps_the_pinned_fortune() {
        let pinned = FortuneState {
            date: day("2026-08-30"),
            index: 3,
        };
        assert_eq!(refresh(Some(&pinned), day("2026-08-30"), 999), 3);
    }

    #[test]
    fn new_day_draws_from_the_roll() {
        let pinned = FortuneState {
            date: day("2026-08-29"),
            index: 3,
        };
        assert_eq!(refresh(Some(&pinned), day("2026-08-30"), 1), 1);
        assert_eq!(refresh(None, day("2026-08-30"), FORTUNES.len() + 2), 2);
    }
}
