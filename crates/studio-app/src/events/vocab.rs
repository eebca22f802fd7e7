use studio_store::{DailyUpdate, NewWord};
use studio_types::Article;

use super::PracticeContext;

pub fn print_terms(article: &Article) {
    if article.key_terms.is_empty() {
        println!("이 기사에는 핵심 용어가 없습니다.");
        return;
    }
    println!("핵심 용어:");
    for (i, term) in article.key_terms.iter().enumerate() {
        println!("  {}. {} — {}", i + 1, term.en, term.ko);
    }
}

/// Add the 1-based nth key term of the current article to the vocabulary.
pub fn handle_add_term(ctx: &mut PracticeContext, index: usize) -> anyhow::Result<()> {
    let Some(term) = index
        .checked_sub(1)
        .and_then(|i| ctx.session.article().key_terms.get(i))
        .cloned()
    else {
        println!("해당 번호의 용어가 없습니다. /terms 로 확인하세요.");
        return Ok(());
    };

    ctx.store.add_word(
        NewWord {
            english: term.en.clone(),
            korean: term.ko.clone(),
            ..Default::default()
        },
        ctx.today,
    )?;
    ctx.store.update_daily(
        ctx.today,
        DailyUpdate {
            vocab: true,
            ..Default::default()
        },
    )?;
    println!("\"{}\" 단어장에 추가됨", term.en);
    Ok(())
}
