//! Activity heatmap buckets, commit-graph style.

/// Map a day's activity count to a bounded intensity bucket (0-4).
/// Thresholds are monotonic in the count.
pub fn grass_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::grass_level;

    #[test]
    fn buckets_are_bounded_and_monotonic() {
        let mut prev = 0;
        for count in 0..100 {
            let level = grass_level(count);
            assert!(level <= 4);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn zero_activity_is_empty() {
        assert_eq!(grass_level(0), 0);
        assert_eq!(grass_level(1), 1);
    }
}
