use studio_feedback::FeedbackMode;
use studio_session::{Progress, SessionSummary, SubmitError};
use studio_store::DailyUpdate;
use studio_types::ScoredFeedback;

use super::{PracticeContext, print_sentence};

/// Score one attempt, apply progression side effects, and report whether
/// the session finished.
pub async fn handle_submit(
    ctx: &mut PracticeContext,
    text: &str,
    premium: bool,
) -> anyhow::Result<bool> {
    let mode = if premium {
        FeedbackMode::Premium
    } else {
        FeedbackMode::Fast
    };

    println!("{} 첨삭 중...", ctx.client.model_name(mode));
    let outcome = match ctx.session.submit(text, &ctx.client, mode).await {
        Ok(outcome) => outcome,
        Err(SubmitError::EmptyInput) => {
            println!("번역을 입력해주세요.");
            return Ok(false);
        }
        Err(SubmitError::NotInProgress) => return Ok(true),
    };

    print_feedback(&outcome.feedback, &outcome.model);

    // One submission earns score/10 exp and one heatmap activity.
    let gain = ctx.store.add_exp(u64::from(outcome.feedback.score / 10))?;
    if gain.leveled_up {
        println!("🎉 레벨 업! Lv.{} {}", gain.level, ctx.store.title());
    }
    ctx.store.record_activity(ctx.today, 1)?;
    ctx.store.update_daily(
        ctx.today,
        DailyUpdate {
            translate: true,
            ..Default::default()
        },
    )?;
    for achievement in ctx.store.check_achievements()? {
        println!("🏅 업적 달성: {} {}", achievement.icon, achievement.name);
    }

    match outcome.progress {
        Progress::Advanced => {
            print_sentence(&ctx.session);
            Ok(false)
        }
        Progress::Finished(summary) => finish(ctx, summary),
    }
}

pub fn handle_skip(ctx: &mut PracticeContext) -> anyhow::Result<bool> {
    match ctx.session.skip() {
        Ok(Progress::Advanced) => {
            println!("건너뜀");
            print_sentence(&ctx.session);
            Ok(false)
        }
        Ok(Progress::Finished(summary)) => finish(ctx, summary),
        Err(_) => Ok(true),
    }
}

/// Commit the finished session: archive entry, completion ticket, and a
/// final achievement pass.
fn finish(ctx: &mut PracticeContext, summary: SessionSummary) -> anyhow::Result<bool> {
    let average = summary.average_score;
    let completed = summary.completed_phrases;
    let total = summary.total_phrases;
    let minutes = summary.minutes;
    summary.commit(&mut ctx.store, chrono::Utc::now(), ctx.today)?;
    for achievement in ctx.store.check_achievements()? {
        println!("🏅 업적 달성: {} {}", achievement.icon, achievement.name);
    }

    println!();
    println!(
        "완료! {completed}/{total} 문장, 평균 {average}점, {minutes}분, +1 티켓 (보유 {})",
        ctx.store.gacha_tickets()
    );
    Ok(true)
}

fn print_feedback(feedback: &ScoredFeedback, model: &str) {
    println!();
    println!("점수: {}점 ({model})", feedback.score);
    println!("{}", feedback.feedback);
    if !feedback.good_points.is_empty() {
        println!("✅ 잘한 점");
        for point in &feedback.good_points {
            println!("  - {point}");
        }
    }
    if !feedback.improvements.is_empty() {
        println!("💡 개선점");
        for point in &feedback.improvements {
            println!("  - {point}");
        }
    }
    if !feedback.missed_points.is_empty() {
        println!("⚠️ 누락된 내용");
        for point in &feedback.missed_points {
            println!("  - {point}");
        }
    }
    if !feedback.model_answer.is_empty() {
        println!("📝 모범 답안: {}", feedback.model_answer);
    }
}
