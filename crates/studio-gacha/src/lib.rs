//! Ticket-gated cosmetic reward draw with a fixed weighted rarity table.

use rand::Rng;
use studio_store::{StoreError, StudioStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Draw weight out of [`TOTAL_WEIGHT`]; rarer tiers weigh less.
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Common => 60,
            Rarity::Rare => 25,
            Rarity::Epic => 10,
            Rarity::Legendary => 5,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Rarity::Common => "일반",
            Rarity::Rare => "레어",
            Rarity::Epic => "에픽",
            Rarity::Legendary => "레전더리",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#9ca3af",
            Rarity::Rare => "#3b82f6",
            Rarity::Epic => "#a855f7",
            Rarity::Legendary => "#f59e0b",
        }
    }
}

pub const TOTAL_WEIGHT: u32 = 100;

/// A drawable sticker reward.
pub struct RewardDef {
    pub item: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
}

pub const REWARDS: &[RewardDef] = &[
    RewardDef { item: "⭐", name: "반짝 별", rarity: Rarity::Common },
    RewardDef { item: "❤️", name: "붉은 하트", rarity: Rarity::Common },
    RewardDef { item: "🔥", name: "작은 불꽃", rarity: Rarity::Common },
    RewardDef { item: "🌸", name: "벚꽃 잎", rarity: Rarity::Common },
    RewardDef { item: "🎈", name: "빨간 풍선", rarity: Rarity::Common },
    RewardDef { item: "🍀", name: "네잎클로버", rarity: Rarity::Common },
    RewardDef { item: "🌙", name: "초승달", rarity: Rarity::Rare },
    RewardDef { item: "🦋", name: "푸른 나비", rarity: Rarity::Rare },
    RewardDef { item: "🌈", name: "무지개", rarity: Rarity::Rare },
    RewardDef { item: "🎭", name: "가면", rarity: Rarity::Rare },
    RewardDef { item: "🎪", name: "서커스 천막", rarity: Rarity::Rare },
    RewardDef { item: "🐉", name: "청룡", rarity: Rarity::Epic },
    RewardDef { item: "🦄", name: "유니콘", rarity: Rarity::Epic },
    RewardDef { item: "🔮", name: "수정 구슬", rarity: Rarity::Epic },
    RewardDef { item: "👑", name: "황금 왕관", rarity: Rarity::Legendary },
    RewardDef { item: "💎", name: "다이아몬드", rarity: Rarity::Legendary },
];

#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("no gacha tickets left")]
    NoTickets,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Consume one ticket and draw a reward; the sticker is added to the
/// collection before returning. A zero balance fails with no side effects.
pub fn draw<R: Rng>(store: &mut StudioStore, rng: &mut R) -> Result<&'static RewardDef, DrawError> {
    if !store.take_gacha_ticket()? {
        return Err(DrawError::NoTickets);
    }
    let reward = sample(rng);
    store.add_sticker(reward.item)?;
    tracing::info!(item = reward.item, rarity = reward.rarity.display_name(), "gacha draw");
    Ok(reward)
}

/// Sample a reward: rarity tier by weight, then uniformly within the tier.
fn sample<R: Rng>(rng: &mut R) -> &'static RewardDef {
    let roll = rng.random_range(0..TOTAL_WEIGHT);
    let mut acc = 0;
    let mut rarity = Rarity::Common;
    for tier in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
        acc += tier.weight();
        if roll < acc {
            rarity = tier;
            break;
        }
    }

    let pool: Vec<&RewardDef> = REWARDS.iter().filter(|r| r.rarity == rarity).collect();
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> StudioStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::mem::forget(dir);
        StudioStore::open(path).unwrap()
    }

    #[test]
    fn weights_sum_to_total() {
        let sum: u32 = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
            .iter()
            .map(|r| r.weight())
            .sum();
        assert_eq!(sum, TOTAL_WEIGHT);
    }

    #[test]
    fn every_rarity_has_rewards() {
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
            assert!(REWARDS.iter().any(|r| r.rarity == rarity));
        }
    }

    #[test]
    fn zero_balance_draw_fails_without_side_effects() {
        let mut store = store();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(draw(&mut store, &mut rng), Err(DrawError::NoTickets)));
        assert_eq!(store.gacha_tickets(), 0);
        assert!(store.state().stickers.is_empty());
    }

    #[test]
    fn draw_consumes_exactly_one_ticket_and_awards_a_sticker() {
        let mut store = store();
        store.add_gacha_tickets(2).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let reward = draw(&mut store, &mut rng).unwrap();
        assert_eq!(store.gacha_tickets(), 1);
        assert!(store.state().stickers.contains(&reward.item.to_string()));
    }

    #[test]
    fn seeded_draws_are_deterministic() {
        let sequence = |seed: u64| -> Vec<&'static str> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20).map(|_| sample(&mut rng).item).collect()
        };
        assert_eq!(sequence(42), sequence(42));
    }
}
