use chrono::NaiveDate;

use crate::state::{DailyProgress, DailyUpdate};

/// Roll the record over if `today` differs from its date, then latch the
/// requested flags. Flags never revert to false within the same day.
pub fn merge(daily: &mut DailyProgress, today: NaiveDate, update: DailyUpdate) {
    roll_over(daily, today);
    daily.article |= update.article;
    daily.translate |= update.translate;
    daily.vocab |= update.vocab;
    daily.quiz |= update.quiz;
}

/// Add practice minutes to today's record.
pub fn add_time(daily: &mut DailyProgress, today: NaiveDate, minutes: u32) {
    roll_over(daily, today);
    daily.time += minutes;
}

fn roll_over(daily: &mut DailyProgress, today: NaiveDate) {
    if daily.date != Some(today) {
        *daily = DailyProgress {
            date: Some(today),
            ..DailyProgress::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn flags_latch_within_a_day() {
        let mut d = DailyProgress::default();
        merge(
            &mut d,
            day("2026-08-30"),
            DailyUpdate {
                translate: true,
                ..Default::default()
            },
        );
        merge(&mut d, day("2026-08-30"), DailyUpdate::default());
        assert!(d.translate);
        assert!(!d.article);
    }

    #[test]
    fn date_change_resets_flags_and_time() {
        let mut d = DailyProgress::default();
        merge(
            &mut d,
            day("2026-08-29"),
            DailyUpdate {
                article: true,
                quiz: true,
                ..Default::default()
            },
        );
        add_time(&mut d, day("2026-08-29"), 25);
        merge(
            &mut d,
            day("2026-08-30"),
            DailyUpdate {
                vocab: true,
                ..Default::default()
            },
        );
        assert!(!d.article);
        assert!(!d.quiz);
        assert!(d.vocab);
        assert_eq!(d.time, 0);
        assert_eq!(d.date, Some(day("2026-08-30")));
    }
}
