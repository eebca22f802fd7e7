use std::io::BufRead;

use rand::Rng;
use rand::seq::SliceRandom;
use studio_config::Config;
use studio_store::{DailyUpdate, VocabularyWord};

use super::{open_store, today};

pub const CHOICES: usize = 4;
pub const POINTS_PER_QUESTION: u32 = 10;

/// One multiple-choice question: a word on one side, `CHOICES` candidates
/// on the other, exactly one of them the paired translation.
pub struct QuizQuestion {
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: usize,
}

fn side(word: &VocabularyWord, korean: bool) -> String {
    if korean {
        word.korean.clone()
    } else {
        word.english.clone()
    }
}

/// Build up to `count` questions with mixed directions. Needs at least
/// `CHOICES` words for the distractors; fewer yields no questions.
pub fn build_questions<R: Rng>(
    words: &[VocabularyWord],
    count: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if words.len() < CHOICES {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..words.len()).collect();
    order.shuffle(rng);
    order.truncate(count);

    order
        .into_iter()
        .map(|qi| {
            let en_to_ko = rng.random_bool(0.5);
            let word = &words[qi];

            let mut pool: Vec<usize> = (0..words.len()).filter(|&i| i != qi).collect();
            pool.shuffle(rng);
            let mut choices: Vec<String> = pool
                .into_iter()
                .take(CHOICES - 1)
                .map(|i| side(&words[i], en_to_ko))
                .collect();
            let answer = rng.random_range(0..=choices.len());
            choices.insert(answer, side(word, en_to_ko));

            QuizQuestion {
                prompt: side(word, !en_to_ko),
                choices,
                answer,
            }
        })
        .collect()
}

pub fn run(config: &Config, count: usize) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let today = today();

    let words = store.vocabulary().to_vec();
    let questions = build_questions(&words, count, &mut rand::rng());
    if questions.is_empty() {
        println!("퀴즈를 내려면 단어가 {CHOICES}개 이상 필요합니다. (현재 {}개)", words.len());
        return Ok(());
    }

    println!("단어 퀴즈 {}문제! 번호로 답하세요.", questions.len());
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut correct = 0u32;

    for (n, question) in questions.iter().enumerate() {
        println!();
        println!("{}. {}", n + 1, question.prompt);
        for (i, choice) in question.choices.iter().enumerate() {
            println!("   {}) {}", i + 1, choice);
        }

        let picked = match lines.next() {
            Some(line) => line?.trim().parse::<usize>().ok(),
            None => break,
        };
        if picked == Some(question.answer + 1) {
            correct += 1;
            println!("⭕ 정답!");
        } else {
            println!("❌ 정답은 {}) {}", question.answer + 1, question.choices[question.answer]);
        }
    }

    let score = correct * POINTS_PER_QUESTION;
    println!();
    println!("결과: {correct}/{} 정답, {score}점", questions.len());

    store.update_daily(
        today,
        DailyUpdate {
            quiz: true,
            ..Default::default()
        },
    )?;
    if store.record_game_score("quiz", score)? {
        println!("🏅 최고 기록 갱신!");
    } else {
        println!("최고 기록: {}점", store.game_best("quiz"));
    }

    let gain = store.add_exp(u64::from(score / 10))?;
    if gain.leveled_up {
        println!("🎉 레벨 업! Lv.{} {}", gain.level, store.title());
    }
    for achievement in store.check_achievements()? {
        println!("🏅 업적 달성: {} {}", achievement.icon, achievement.name);
    }
    Ok(())
}
