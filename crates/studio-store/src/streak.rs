use chrono::NaiveDate;

use crate::state::StreakState;

/// Advance a streak for an activity on `today`.
///
/// Same-day calls are no-ops, the day after the last active date increments,
/// anything older resets to 1. `best` tracks the running maximum.
pub fn advance(streak: &mut StreakState, today: NaiveDate) -> bool {
    let changed = match streak.last_active_date {
        Some(last) if last == today => false,
        Some(last) if last.succ_opt() == Some(today) => {
            streak.count += 1;
            true
        }
        _ => {
            streak.count = 1;
            true
        }
    };

    if changed {
        streak.last_active_date = Some(today);
        streak.best = streak.best.max(streak.count);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut s = StreakState::default();
        assert!(advance(&mut s, day("2026-08-30")));
        assert!(!advance(&mut s, day("2026-08-30")));
        assert_eq!(s.count, 1);
        assert_eq!(s.best, 1);
    }

    #[test]
    fn consecutive_days_increment() {
        let mut s = StreakState::default();
        advance(&mut s, day("2026-08-28"));
        advance(&mut s, day("2026-08-29"));
        advance(&mut s, day("2026-08-30"));
        assert_eq!(s.count, 3);
        assert_eq!(s.best, 3);
    }

    #[test]
    fn gap_resets_but_best_survives() {
        let mut s = StreakState::default();
        advance(&mut s, day("2026-08-01"));
        advance(&mut s, day("2026-08-02"));
        advance(&mut s, day("2026-08-10"));
        assert_eq!(s.count, 1);
        assert_eq!(s.best, 2);
        assert_eq!(s.last_active_date, Some(day("2026-08-10")));
    }
}
