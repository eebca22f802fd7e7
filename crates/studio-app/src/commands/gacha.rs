use rand::SeedableRng;
use rand::rngs::StdRng;
use studio_config::Config;
use studio_gacha::{DrawError, REWARDS, Rarity};

use crate::cli::GachaCommand;

use super::open_store;

pub fn run(config: &Config, command: GachaCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;

    match command {
        GachaCommand::Tickets => {
            println!("🎟️ 뽑기권: {}장", store.gacha_tickets());
            let stickers = &store.state().stickers;
            if stickers.is_empty() {
                println!("아직 모은 스티커가 없습니다. 연습을 완료하면 뽑기권을 받아요!");
                return Ok(());
            }
            println!("스티커 {}종 / {}종", stickers.len(), REWARDS.len());
            for tier in [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary] {
                let line: Vec<String> = REWARDS
                    .iter()
                    .filter(|r| r.rarity == tier)
                    .map(|r| {
                        if stickers.iter().any(|s| s == r.item) {
                            format!("{} {}", r.item, r.name)
                        } else {
                            "❔".to_string()
                        }
                    })
                    .collect();
                println!("  {}: {}", tier.display_name(), line.join("  "));
            }
        }
        GachaCommand::Draw => {
            let mut rng = StdRng::from_os_rng();
            match studio_gacha::draw(&mut store, &mut rng) {
                Ok(reward) => {
                    println!(
                        "✨ [{}] {} {} 획득!",
                        reward.rarity.display_name(),
                        reward.item,
                        reward.name
                    );
                    println!("남은 뽑기권: {}장", store.gacha_tickets());
                }
                Err(DrawError::NoTickets) => {
                    println!("뽑기권이 없습니다. 연습 세션을 완료하면 1장을 받습니다.");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}
