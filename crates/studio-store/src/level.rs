//! Experience curve and level titles.

/// Total experience required to sit at each level. Index `n` holds the
/// threshold for level `n + 1`; the curve is triangular (100, 300, 600, ...),
/// extended linearly past the table for levels above its end.
const THRESHOLDS: [u64; 20] = [
    0, 100, 300, 600, 1000, 1500, 2100, 2800, 3600, 4500, 5500, 6600, 7800, 9100, 10500, 12000,
    13600, 15300, 17100, 19000,
];

const TITLES: [(u32, &str); 7] = [
    (1, "견습 통번역사"),
    (3, "주니어 통번역사"),
    (5, "통번역사"),
    (8, "시니어 통번역사"),
    (12, "프로 통번역사"),
    (16, "마스터 통번역사"),
    (20, "통번역의 전설"),
];

/// Level for a total experience amount. Monotonic in `exp`, never below 1.
pub fn level_for_exp(exp: u64) -> u32 {
    let mut level = 1u32;
    for (i, threshold) in THRESHOLDS.iter().enumerate() {
        if exp >= *threshold {
            level = i as u32 + 1;
        }
    }
    // Past the table, every further 2000 exp is one more level.
    if exp > THRESHOLDS[THRESHOLDS.len() - 1] {
        let extra = exp - THRESHOLDS[THRESHOLDS.len() - 1];
        level += (extra / 2000) as u32;
    }
    level
}

/// Total experience required to reach the next level.
pub fn exp_for_next_level(level: u32) -> u64 {
    let next = level as usize; // index of level + 1
    if next < THRESHOLDS.len() {
        THRESHOLDS[next]
    } else {
        THRESHOLDS[THRESHOLDS.len() - 1] + (next + 1 - THRESHOLDS.len()) as u64 * 2000
    }
}

/// Display title for a level; the highest table entry at or below it.
pub fn title_for_level(level: u32) -> &'static str {
    let mut title = TITLES[0].1;
    for (at, name) in TITLES {
        if level >= at {
            title = name;
        }
    }
    title
}
