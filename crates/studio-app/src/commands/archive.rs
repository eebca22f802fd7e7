use anyhow::bail;
use studio_config::Config;
use studio_types::SessionKind;

use crate::cli::ArchiveCommand;

use super::open_store;

pub fn run(config: &Config, command: ArchiveCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;

    match command {
        ArchiveCommand::List => {
            if store.archive().is_empty() {
                println!("아카이브가 비어 있습니다");
                return Ok(());
            }
            for entry in store.archive().iter().rev() {
                let kind = match entry.kind {
                    SessionKind::Translation => "번역",
                    SessionKind::Interpretation => "통역",
                };
                println!(
                    "{}  [{kind}] {} — {}/{}문장, 평균 {}점  [{}]",
                    entry.date.format("%Y-%m-%d"),
                    entry.article_title,
                    entry.completed_phrases,
                    entry.total_phrases,
                    entry.average_score,
                    entry.id,
                );
            }
        }
        ArchiveCommand::Show { id } => {
            let Some(entry) = store.archive().iter().find(|a| a.id == id) else {
                bail!("no archive entry with id {id}");
            };
            println!("{} ({})", entry.article_title, entry.direction.label());
            println!(
                "완료 {}/{}  평균 {}점",
                entry.completed_phrases, entry.total_phrases, entry.average_score
            );
            if let Some(memo) = &entry.memo {
                println!("메모: {memo}");
            }
            println!();
            for (i, record) in entry.records.iter().enumerate() {
                println!("{}. {}", i + 1, record.original);
                if record.skipped {
                    println!("   (건너뜀)");
                    continue;
                }
                println!("   내 답안: {} ({}점)", record.user_translation, record.score);
                if let Some(model) = &record.model {
                    println!("   모범 답안: {model}");
                }
            }
        }
        ArchiveCommand::Memo { id, text } => {
            if !store.update_archive_memo(id, text)? {
                bail!("no archive entry with id {id}");
            }
            println!("메모 저장됨");
        }
    }
    Ok(())
}
