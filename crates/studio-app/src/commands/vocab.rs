use anyhow::bail;
use studio_config::Config;
use studio_store::{NewWord, VocabularyWord, WordPatch};

use crate::cli::VocabCommand;

use super::{open_store, today};

pub fn run(config: &Config, command: VocabCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let today = today();

    match command {
        VocabCommand::List { tab } => {
            let words: Vec<&VocabularyWord> = match tab.as_str() {
                "today" => store.today_words(today),
                "all" => store.vocabulary().iter().collect(),
                "starred" => store.starred_words(),
                "review" => store.review_words(),
                other => bail!("unknown tab '{other}' (today|all|starred|review)"),
            };
            if words.is_empty() {
                println!("단어 없음");
                return Ok(());
            }
            for word in words {
                let star = if word.starred { "⭐" } else { "  " };
                let master = if word.mastered { " ✓" } else { "" };
                let pos = word
                    .part_of_speech
                    .as_deref()
                    .map(|p| format!(" ({p})"))
                    .unwrap_or_default();
                println!("{star} {} — {}{pos}{master}  [{}]", word.english, word.korean, word.id);
            }
        }
        VocabCommand::Add {
            english,
            korean,
            pos,
            example,
        } => {
            store.add_word(
                NewWord {
                    english: english.clone(),
                    korean,
                    part_of_speech: pos,
                    example,
                },
                today,
            )?;
            println!("\"{english}\" 추가됨");
        }
        VocabCommand::Star { id } => {
            let starred = store
                .vocabulary()
                .iter()
                .find(|w| w.id == id)
                .map(|w| w.starred);
            match starred {
                Some(starred) => {
                    store.update_word(
                        id,
                        WordPatch {
                            starred: Some(!starred),
                            ..Default::default()
                        },
                    )?;
                    println!("{}", if starred { "별표 해제" } else { "별표 ⭐" });
                }
                None => bail!("no word with id {id}"),
            }
        }
        VocabCommand::Review { id } => {
            if !store.update_word(
                id,
                WordPatch {
                    last_reviewed: Some(today),
                    ..Default::default()
                },
            )? {
                bail!("no word with id {id}");
            }
            println!("복습 완료로 기록됨");
        }
        VocabCommand::Master { id } => {
            let mastered = store
                .vocabulary()
                .iter()
                .find(|w| w.id == id)
                .map(|w| w.mastered);
            match mastered {
                Some(mastered) => {
                    store.update_word(
                        id,
                        WordPatch {
                            mastered: Some(!mastered),
                            ..Default::default()
                        },
                    )?;
                    println!("{}", if mastered { "마스터 해제" } else { "마스터 🏆" });
                }
                None => bail!("no word with id {id}"),
            }
        }
        VocabCommand::Delete { id } => {
            if !store.delete_word(id)? {
                bail!("no word with id {id}");
            }
            println!("삭제됨");
        }
    }

    for achievement in store.check_achievements()? {
        println!("🏅 업적 달성: {} {}", achievement.icon, achievement.name);
    }
    Ok(())
}
